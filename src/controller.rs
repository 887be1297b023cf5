//! Event handlers. Each one takes the application state explicitly, mutates the
//! slice it owns and hands back what the view needs to redraw.

use crate::api::RecipeApi;
use crate::error::BrowserError;
use crate::likes::{LikedRecipe, Likes};
use crate::recipe::{Recipe, ServingsDirection};
use crate::search::Search;
use crate::shopping_list::{ShoppingList, ShoppingListItem};
use log::{error, info};

/// Everything the browser holds for one session
pub struct AppState {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Likes,
}

/// Outcome of pressing the like button
#[derive(Debug, Clone, PartialEq)]
pub enum LikeToggle {
    Liked(LikedRecipe),
    Unliked(String),
}

impl AppState {
    /// Fresh session state with likes restored from storage
    pub fn restore(mut likes: Likes) -> Self {
        likes.read_storage();
        info!("Session started with {} liked recipes", likes.num_likes());
        AppState {
            search: None,
            recipe: None,
            list: None,
            likes,
        }
    }

    fn current_recipe(&self) -> Result<&Recipe, BrowserError> {
        self.recipe.as_ref().ok_or(BrowserError::NoRecipeLoaded)
    }
}

/// Run a search. A blank query does nothing; a failed search keeps the
/// previous results.
pub async fn control_search<'a>(
    state: &'a mut AppState,
    api: &dyn RecipeApi,
    query: &str,
) -> Result<Option<&'a Search>, BrowserError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }

    let mut search = Search::new(query);
    if let Err(e) = search.get_results(api).await {
        error!("Search for '{}' failed: {}", query, e);
        return Err(e);
    }

    state.search = Some(search);
    Ok(state.search.as_ref())
}

/// Open a recipe by id. Returns the recipe and whether it is liked.
pub async fn control_recipe<'a>(
    state: &'a mut AppState,
    api: &dyn RecipeApi,
    id: &str,
) -> Result<(&'a Recipe, bool), BrowserError> {
    let id = id.trim();
    let mut recipe = match Recipe::load(api, id).await {
        Ok(recipe) => recipe,
        Err(e) => {
            error!("Loading recipe {} failed: {}", id, e);
            return Err(e);
        }
    };

    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings();

    let liked = state.likes.is_liked(&recipe.id);
    let recipe: &Recipe = state.recipe.insert(recipe);
    Ok((recipe, liked))
}

/// Press the servings +/- control. Returns false when nothing changed.
pub fn control_servings(
    state: &mut AppState,
    direction: ServingsDirection,
) -> Result<bool, BrowserError> {
    let recipe = state.recipe.as_mut().ok_or(BrowserError::NoRecipeLoaded)?;
    Ok(recipe.update_servings(direction))
}

/// Add every ingredient of the open recipe to the shopping list
pub fn control_list(state: &mut AppState) -> Result<Vec<ShoppingListItem>, BrowserError> {
    let recipe = state.current_recipe()?;
    let ingredients = recipe.ingredients.clone();

    let list = state.list.get_or_insert_with(ShoppingList::new);
    let added: Vec<ShoppingListItem> = ingredients
        .into_iter()
        .map(|ing| list.add_item(ing.count, ing.unit, ing.ingredient).clone())
        .collect();

    info!("Added {} items to the shopping list", added.len());
    Ok(added)
}

pub fn control_list_delete(
    state: &mut AppState,
    id: &str,
) -> Result<ShoppingListItem, BrowserError> {
    shopping_list(state)?.delete_item(id)
}

pub fn control_list_count(state: &mut AppState, id: &str, count: f64) -> Result<(), BrowserError> {
    shopping_list(state)?.update_count(id, count)
}

/// Like the open recipe, or unlike it if it already is
pub fn control_like(state: &mut AppState) -> Result<LikeToggle, BrowserError> {
    let recipe = state.current_recipe()?;
    let (id, title, author, image) = (
        recipe.id.clone(),
        recipe.title.clone(),
        recipe.author.clone(),
        recipe.image.clone(),
    );

    if state.likes.is_liked(&id) {
        state.likes.delete_like(&id);
        Ok(LikeToggle::Unliked(id))
    } else {
        Ok(LikeToggle::Liked(state.likes.add_like(id, title, author, image)))
    }
}

fn shopping_list(state: &mut AppState) -> Result<&mut ShoppingList, BrowserError> {
    state
        .list
        .as_mut()
        .ok_or_else(|| BrowserError::NotFoundError("shopping list is empty".to_string()))
}
