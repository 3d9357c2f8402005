//! View-layer data contracts shared between the fetch layer and the
//! rendering components.
//!
//! All of these shapes are transient: produced by whatever queries the
//! backend, consumed by renderers, discarded on re-fetch. Nothing here
//! persists anything.

mod category;
mod filters;
mod header;
mod recipe;

pub use category::Category;
pub use filters::RecipeFilters;
pub use header::{BoolUpdate, FlagSetter, RecipeHeaderProps};
pub use recipe::{Recipe, RecipeBuilder};
