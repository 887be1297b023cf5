use crate::error::BrowserError;
use crate::recipe::Unit;
use log::debug;

/// One line on the shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: Option<f64>,
    pub unit: Option<Unit>,
    pub ingredient: String,
}

/// Items keyed by a generated id, kept in insertion order
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item; duplicates are not merged
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: Option<Unit>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        self.next_id += 1;
        let item = ShoppingListItem {
            id: format!("item-{:x}", self.next_id),
            count,
            unit,
            ingredient: ingredient.into(),
        };
        debug!("Adding {} to shopping list", item.id);
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn delete_item(&mut self, id: &str) -> Result<ShoppingListItem, BrowserError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Set an item's count. Negative or non-finite counts are rejected.
    pub fn update_count(&mut self, id: &str, new_count: f64) -> Result<(), BrowserError> {
        if !new_count.is_finite() || new_count < 0.0 {
            return Err(BrowserError::InvalidCount(new_count));
        }
        let index = self.position(id)?;
        self.items[index].count = Some(new_count);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, BrowserError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| BrowserError::NotFoundError(format!("shopping list item {}", id)))
    }
}
