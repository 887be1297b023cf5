pub mod api;
pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod likes;
pub mod model;
pub mod recipe;
pub mod search;
pub mod shopping_list;
pub mod storage;
pub mod view;

pub use api::{HttpRecipeApi, RecipeApi};
pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use config::{load_config, BrowserConfig};
pub use controller::{
    control_like, control_list, control_list_count, control_list_delete, control_recipe,
    control_search, control_servings, AppState, LikeToggle,
};
pub use error::BrowserError;
pub use likes::{LikedRecipe, Likes};
pub use model::{RecipeDetail, RecipeSummary};
pub use recipe::{Ingredient, Recipe, ServingsDirection, Unit};
pub use search::Search;
pub use shopping_list::{ShoppingList, ShoppingListItem};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
