//! Plain-text rendering of the browser state.

use crate::likes::LikedRecipe;
use crate::recipe::{format_quantity, Recipe};
use crate::search::Search;
use crate::shopping_list::{ShoppingList, ShoppingListItem};
use std::fmt::Write;

/// Longest title shown in result and like lists
pub const TITLE_LIMIT: usize = 17;

/// Shorten a title at a word boundary, e.g. "Pasta with tomato and spinach"
/// becomes "Pasta with tomato ..."
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut len = 0;
    for word in title.split_whitespace() {
        if len + word.chars().count() > limit {
            break;
        }
        len += word.chars().count() + 1;
        kept.push(word);
    }

    if kept.is_empty() {
        // A single word longer than the limit
        let cut: String = title.chars().take(limit).collect();
        return format!("{} ...", cut);
    }
    format!("{} ...", kept.join(" "))
}

/// One page of search results followed by the pagination hint
pub fn render_results(search: &Search, page: usize, per_page: usize) -> String {
    let mut out = String::new();
    if search.results.is_empty() {
        let _ = writeln!(out, "No recipes found for '{}'.", search.query);
        return out;
    }

    let pages = search.num_pages(per_page);
    let results = search.page(page, per_page);
    if results.is_empty() {
        let _ = writeln!(out, "Page {} is out of range (1..={}).", page, pages);
        return out;
    }

    for summary in results {
        let _ = writeln!(
            out,
            "{:>8}  {:<21} {}",
            summary.id,
            limit_title(&summary.title, TITLE_LIMIT),
            summary.author
        );
    }

    let mut nav = Vec::new();
    if page > 1 {
        nav.push(format!("'page {}' for previous", page - 1));
    }
    if page < pages {
        nav.push(format!("'page {}' for next", page + 1));
    }
    let _ = write!(out, "Page {}/{}", page, pages);
    if !nav.is_empty() {
        let _ = write!(out, " ({})", nav.join(", "));
    }
    out.push('\n');
    out
}

pub fn render_recipe(recipe: &Recipe, liked: bool) -> String {
    let mut out = String::new();
    let heart = if liked { "[liked]" } else { "[ ]" };
    let _ = writeln!(out, "{} {}", recipe.title, heart);
    let _ = writeln!(out, "by {}", recipe.author);
    let _ = writeln!(
        out,
        "{} minutes, {} servings",
        recipe.time_minutes(),
        recipe.servings()
    );
    out.push('\n');

    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", ingredient);
    }

    if !recipe.source_url.is_empty() {
        let _ = writeln!(out, "\nDirections: {}", recipe.source_url);
    }
    out
}

pub fn render_item(item: &ShoppingListItem) -> String {
    let mut parts = vec![item.id.clone()];
    if let Some(count) = item.count {
        parts.push(format_quantity(count));
    }
    if let Some(unit) = item.unit {
        parts.push(unit.to_string());
    }
    parts.push(item.ingredient.clone());
    parts.join("  ")
}

pub fn render_list(list: Option<&ShoppingList>) -> String {
    match list {
        Some(list) if !list.is_empty() => list
            .items()
            .iter()
            .map(|item| format!("{}\n", render_item(item)))
            .collect(),
        _ => "Shopping list is empty.\n".to_string(),
    }
}

pub fn render_likes(likes: &[LikedRecipe]) -> String {
    if likes.is_empty() {
        return "No liked recipes yet.\n".to_string();
    }

    let mut out = format!("{} liked:\n", likes.len());
    for like in likes {
        let _ = writeln!(
            out,
            "{:>8}  {:<21} {}",
            like.id,
            limit_title(&like.title, TITLE_LIMIT),
            like.author
        );
    }
    out
}
