mod ingredient;

pub use ingredient::{format_quantity, Ingredient, Unit};

use crate::api::RecipeApi;
use crate::error::BrowserError;
use crate::model::RecipeDetail;
use log::{debug, info};

/// Estimated preparation time per ingredient
pub const MINUTES_PER_INGREDIENT: u32 = 15;

/// Servings assumed when the API does not say
pub const DEFAULT_SERVINGS: u32 = 4;

/// Which way the servings controls were pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Increment,
    Decrement,
}

/// The recipe currently open, with parsed and scaled ingredients
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    pub ingredient_lines: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    servings_original: u32,
    servings_current: u32,
    time_minutes: u32,
}

impl Recipe {
    /// Build an unparsed recipe from API detail. Blank ingredient lines are dropped.
    pub fn from_detail(detail: RecipeDetail) -> Self {
        let servings = detail
            .servings
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_SERVINGS);

        Recipe {
            id: detail.id,
            title: detail.title,
            author: detail.author,
            image: detail.image,
            source_url: detail.source_url,
            ingredient_lines: detail
                .ingredient_lines
                .into_iter()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            ingredients: Vec::new(),
            servings_original: servings,
            servings_current: servings,
            time_minutes: 0,
        }
    }

    /// Fetch a recipe by id. The result still needs `parse_ingredients`,
    /// `calc_time` and `calc_servings`.
    pub async fn load(api: &dyn RecipeApi, id: &str) -> Result<Self, BrowserError> {
        debug!("Loading recipe {}", id);
        let detail = api.get_recipe(id).await?;
        Ok(Recipe::from_detail(detail))
    }

    /// Derive structured ingredients from the raw lines
    pub fn parse_ingredients(&mut self) {
        self.ingredients = self
            .ingredient_lines
            .iter()
            .map(|line| Ingredient::parse(line))
            .collect();
        debug!(
            "Parsed {} ingredients for recipe {}",
            self.ingredients.len(),
            self.id
        );
    }

    /// Time estimate: ingredient count times `MINUTES_PER_INGREDIENT`
    pub fn calc_time(&mut self) -> u32 {
        self.time_minutes = self.ingredient_lines.len() as u32 * MINUTES_PER_INGREDIENT;
        self.time_minutes
    }

    /// Reset the current servings to the API-provided size
    pub fn calc_servings(&mut self) {
        self.servings_current = self.servings_original;
        self.rescale();
    }

    /// Step servings up or down by one and rescale every ingredient.
    /// Returns false when a decrement was refused at one serving.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        let next = match direction {
            ServingsDirection::Increment => self.servings_current + 1,
            ServingsDirection::Decrement if self.servings_current <= 1 => return false,
            ServingsDirection::Decrement => self.servings_current - 1,
        };

        self.servings_current = next;
        self.rescale();
        info!(
            "Recipe {} now serves {} (originally {})",
            self.id, self.servings_current, self.servings_original
        );
        true
    }

    fn rescale(&mut self) {
        let ratio = self.servings_current as f64 / self.servings_original as f64;
        for ingredient in &mut self.ingredients {
            ingredient.rescale(ratio);
        }
    }

    pub fn servings_original(&self) -> u32 {
        self.servings_original
    }

    pub fn servings(&self) -> u32 {
        self.servings_current
    }

    pub fn time_minutes(&self) -> u32 {
        self.time_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(servings: Option<u32>, lines: &[&str]) -> RecipeDetail {
        RecipeDetail {
            id: "47746".to_string(),
            title: "Best Pizza Dough Ever".to_string(),
            author: "101 Cookbooks".to_string(),
            image: "http://example.com/dough.jpg".to_string(),
            source_url: "http://example.com/dough".to_string(),
            servings,
            cook_time_minutes: None,
            ingredient_lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn prepared(servings: Option<u32>, lines: &[&str]) -> Recipe {
        let mut recipe = Recipe::from_detail(detail(servings, lines));
        recipe.parse_ingredients();
        recipe.calc_time();
        recipe.calc_servings();
        recipe
    }

    #[test]
    fn test_calc_time() {
        let lines = ["1 egg"; 8];
        let mut recipe = Recipe::from_detail(detail(Some(2), &lines));
        assert_eq!(recipe.calc_time(), 120);
        assert_eq!(recipe.time_minutes(), 120);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let recipe = Recipe::from_detail(detail(None, &["1 egg", "  ", ""]));
        assert_eq!(recipe.ingredient_lines, vec!["1 egg"]);
    }

    #[test]
    fn test_default_servings() {
        let recipe = prepared(None, &["1 egg"]);
        assert_eq!(recipe.servings_original(), DEFAULT_SERVINGS);
        assert_eq!(recipe.servings(), DEFAULT_SERVINGS);

        let recipe = prepared(Some(0), &["1 egg"]);
        assert_eq!(recipe.servings(), DEFAULT_SERVINGS);
    }

    #[test]
    fn test_scaling_ratio() {
        let mut recipe = prepared(Some(4), &["2 cups flour", "1/2 tsp salt", "water"]);

        recipe.update_servings(ServingsDirection::Increment);
        recipe.update_servings(ServingsDirection::Increment);
        assert_eq!(recipe.servings(), 6);
        assert_eq!(recipe.ingredients[0].count, Some(3.0));
        assert_eq!(recipe.ingredients[1].count, Some(0.75));
        assert_eq!(recipe.ingredients[2].count, None);
    }

    #[test]
    fn test_increment_then_decrement_restores_counts() {
        let mut recipe = prepared(Some(3), &["1/3 cup milk", "1 1/2 cups flour"]);
        let before: Vec<_> = recipe.ingredients.iter().map(|i| i.count).collect();

        for _ in 0..5 {
            recipe.update_servings(ServingsDirection::Increment);
        }
        for _ in 0..5 {
            recipe.update_servings(ServingsDirection::Decrement);
        }

        let after: Vec<_> = recipe.ingredients.iter().map(|i| i.count).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_decrement_floor() {
        let mut recipe = prepared(Some(1), &["2 eggs"]);

        assert!(!recipe.update_servings(ServingsDirection::Decrement));
        assert_eq!(recipe.servings(), 1);
        assert_eq!(recipe.ingredients[0].count, Some(2.0));
    }
}
