use serde::{Deserialize, Serialize};

/// A named classification tag attachable to a recipe.
///
/// Immutable once fetched; no back-reference to the recipes that carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub image_url: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}
