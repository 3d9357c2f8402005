use serde::{Deserialize, Serialize};

/// A partial query description used to narrow a recipe listing.
///
/// Every field is optional; an absent field means "no constraint", and the
/// all-absent default is a valid, unfiltered query. `categories` carries
/// category *names* — deliberately narrower than `Recipe::categories`,
/// since a filter only needs the label to match against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl RecipeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains the listing.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.categories.is_none()
            && self.sort.is_none()
            && self.page.is_none()
    }
}
