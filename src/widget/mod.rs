//! Widget layer: renderable element vocabulary and the hover-disclosure
//! tooltip primitive.

mod anchor;
mod tooltip;

pub use anchor::PanelAnchor;
pub use tooltip::{HoverState, Tooltip};

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique widget ID.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// What a tooltip slot (trigger or panel content) can hold.
///
/// `Empty` is the valid absent case: an empty slot renders as an empty
/// region, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Element {
    #[default]
    Empty,
    Text(String),
    Button {
        label: String,
    },
    Image {
        url: String,
    },
}

impl Element {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::Button { label: label.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// The visible text of this element, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Element::Empty | Element::Image { .. } => None,
            Element::Text(s) => Some(s),
            Element::Button { label } => Some(label),
        }
    }
}
