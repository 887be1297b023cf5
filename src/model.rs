use serde::{Deserialize, Serialize};

/// Lightweight recipe entry returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher", default)]
    pub author: String,
    #[serde(rename = "image_url", default)]
    pub image: String,
}

/// Full recipe detail as served by the API, before any parsing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeDetail {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher", default)]
    pub author: String,
    #[serde(rename = "image_url", default)]
    pub image: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(rename = "cooking_time", default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(rename = "ingredients", default)]
    pub ingredient_lines: Vec<String>,
}

/// Body of `GET /search`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET /get`
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeResponse {
    #[serde(default)]
    pub recipe: Option<RecipeDetail>,
    #[serde(default)]
    pub error: Option<String>,
}
