use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::{Error, Result};

/// A recipe as delivered by the fetch layer.
///
/// `categories` holds full [`Category`] objects, never bare names or ids.
/// An earlier revision of this contract carried `Vec<String>` here and
/// renderers broke on the missing fields; the element type now makes that
/// shape unrepresentable, and a JSON payload with a string array fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub calories: u32,
    /// Cook time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    pub image_url: String,
    pub rating: f32,
    pub difficulty: String,
    pub categories: Vec<Category>,
}

impl Recipe {
    pub fn builder() -> RecipeBuilder {
        RecipeBuilder::default()
    }
}

/// Incremental constructor enforcing the required fields of [`Recipe`].
///
/// `build` fails with [`Error::MissingField`] when a required field was
/// never supplied; optional fields default to absent.
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    id: Option<u64>,
    title: Option<String>,
    description: Option<String>,
    calories: Option<u32>,
    cook_time: Option<u32>,
    image_url: Option<String>,
    rating: Option<f32>,
    difficulty: Option<String>,
    categories: Vec<Category>,
}

impl RecipeBuilder {
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = Some(calories);
        self
    }

    pub fn cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = Some(minutes);
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Attach a category. Takes a full [`Category`] by construction.
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn build(self) -> Result<Recipe> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
            value.ok_or(Error::MissingField { record: "Recipe", field })
        }

        Ok(Recipe {
            id: required(self.id, "id")?,
            title: required(self.title, "title")?,
            description: self.description,
            calories: required(self.calories, "calories")?,
            cook_time: self.cook_time,
            image_url: required(self.image_url, "image_url")?,
            rating: required(self.rating, "rating")?,
            difficulty: required(self.difficulty, "difficulty")?,
            categories: self.categories,
        })
    }
}
