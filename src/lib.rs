//! Recipe UI kit
//!
//! Hover-disclosure tooltip primitive and the data contracts shared by
//! recipe listing, filter, and header components. The render layer emits
//! toolkit-agnostic display commands; hover logic is an explicit two-state
//! machine, testable without a GUI loop.

pub mod error;
pub mod event;
pub mod geom;
pub mod model;
pub mod render;
pub mod widget;

pub use error::{Error, Result};
pub use model::{BoolUpdate, Category, Recipe, RecipeFilters, RecipeHeaderProps};
pub use widget::{Element, HoverState, Tooltip};
