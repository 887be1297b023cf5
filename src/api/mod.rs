mod http;

pub use http::HttpRecipeApi;

use crate::error::BrowserError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Port to the remote recipe search/lookup service
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes by free-text query, in the order the service ranks them
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, BrowserError>;

    /// Fetch the full detail of one recipe
    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail, BrowserError>;
}
