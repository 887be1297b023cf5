use crate::error::BrowserError;
use crate::storage::KeyValueStore;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// A bookmarked recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

/// Liked recipes in the order they were liked, mirrored to a key-value store
pub struct Likes {
    likes: Vec<LikedRecipe>,
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Likes {
    /// Start with an empty list; call `read_storage` to restore saved likes
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Likes {
            likes: Vec::new(),
            store,
            key: key.into(),
        }
    }

    /// Like a recipe. Liking an already liked recipe returns the existing record.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        image: impl Into<String>,
    ) -> LikedRecipe {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|like| like.id == id) {
            debug!("Recipe {} is already liked", id);
            return existing.clone();
        }

        let like = LikedRecipe {
            id,
            title: title.into(),
            author: author.into(),
            image: image.into(),
        };
        info!("Liked recipe {}", like.id);
        self.likes.push(like.clone());
        self.persist();
        like
    }

    /// Remove a like. Returns the removed record, if there was one.
    pub fn delete_like(&mut self, id: &str) -> Option<LikedRecipe> {
        let index = self.likes.iter().position(|like| like.id == id)?;
        let removed = self.likes.remove(index);
        info!("Unliked recipe {}", id);
        self.persist();
        Some(removed)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Replace the in-memory list with what the store holds.
    /// Missing or unreadable data leaves an empty list.
    pub fn read_storage(&mut self) {
        self.likes = match self.load() {
            Ok(likes) => likes,
            Err(e) => {
                warn!("Ignoring stored likes: {}", e);
                Vec::new()
            }
        };
        debug!("Restored {} likes", self.likes.len());
    }

    fn load(&self) -> Result<Vec<LikedRecipe>, BrowserError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let mut likes: Vec<LikedRecipe> = serde_json::from_str(&raw)
            .map_err(|e| BrowserError::PersistenceError(format!("corrupt likes data: {}", e)))?;

        // Keep the first occurrence of each id
        let mut seen = std::collections::HashSet::new();
        likes.retain(|like| seen.insert(like.id.clone()));
        Ok(likes)
    }

    /// Overwrite the stored list. Failures are logged, never raised.
    fn persist(&self) {
        let result = serde_json::to_string(&self.likes)
            .map_err(|e| BrowserError::PersistenceError(e.to_string()))
            .and_then(|json| self.store.set(&self.key, &json));
        if let Err(e) = result {
            warn!("Failed to save likes: {}", e);
        }
    }
}
