//! Input contract for the recipe detail header.
//!
//! The header never owns the `liked`/`saved` flags. The caller supplies
//! current values plus two setter callbacks, and the header requests
//! changes through those callbacks only — fire-and-forget, reflected by
//! the owner on its next render pass.

use std::fmt;

/// A requested change to an owner-held boolean flag.
///
/// Either a literal replacement value or a pure function of the previous
/// value, mirroring the two call forms a state setter accepts.
#[derive(Clone, Copy)]
pub enum BoolUpdate {
    Value(bool),
    Updater(fn(bool) -> bool),
}

impl BoolUpdate {
    /// Resolve the update against the previous value.
    pub fn apply(self, previous: bool) -> bool {
        match self {
            BoolUpdate::Value(v) => v,
            BoolUpdate::Updater(f) => f(previous),
        }
    }
}

impl fmt::Debug for BoolUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolUpdate::Value(v) => f.debug_tuple("Value").field(v).finish(),
            BoolUpdate::Updater(_) => f.debug_tuple("Updater").field(&"<fn>").finish(),
        }
    }
}

/// Callback through which the header requests a flag change.
pub type FlagSetter = Box<dyn FnMut(BoolUpdate)>;

/// Fully-resolved input to the recipe detail header.
pub struct RecipeHeaderProps {
    pub title: String,
    pub author: String,
    pub date: String,
    pub rating: f32,
    pub comments: u32,
    pub image_url: String,
    pub liked: bool,
    pub saved: bool,
    set_liked: FlagSetter,
    set_saved: FlagSetter,
}

impl RecipeHeaderProps {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        rating: f32,
        comments: u32,
        image_url: impl Into<String>,
        liked: bool,
        saved: bool,
        set_liked: FlagSetter,
        set_saved: FlagSetter,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            rating,
            comments,
            image_url: image_url.into(),
            liked,
            saved,
            set_liked,
            set_saved,
        }
    }

    /// Request a change to the liked flag. No return value and no ordering
    /// guarantee beyond the owner's next render pass.
    pub fn request_liked(&mut self, update: BoolUpdate) {
        (self.set_liked)(update);
    }

    /// Request a change to the saved flag.
    pub fn request_saved(&mut self, update: BoolUpdate) {
        (self.set_saved)(update);
    }
}

impl fmt::Debug for RecipeHeaderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeHeaderProps")
            .field("title", &self.title)
            .field("author", &self.author)
            .field("date", &self.date)
            .field("rating", &self.rating)
            .field("comments", &self.comments)
            .field("image_url", &self.image_url)
            .field("liked", &self.liked)
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_update_apply() {
        assert!(BoolUpdate::Value(true).apply(false));
        assert!(!BoolUpdate::Value(false).apply(true));
        assert!(BoolUpdate::Updater(|prev| !prev).apply(false));
        assert!(!BoolUpdate::Updater(|prev| !prev).apply(true));
    }
}
