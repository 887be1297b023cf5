//! Key-value storage for data that must survive a restart.

use crate::error::BrowserError;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Port to a string key-value store, in the manner of browser local storage
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError>;
}

/// Stores each key as `<dir>/<key>.json`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BrowserError::PersistenceError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|e| {
            BrowserError::PersistenceError(format!(
                "Failed to create {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        // Write a sibling file, then rename it over the old value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                BrowserError::PersistenceError(format!("Failed to write {}: {}", path.display(), e))
            })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-memory store. Clones share the same map, so a clone can stand in for
/// the same storage after a simulated restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError> {
        let values = self
            .values
            .lock()
            .map_err(|e| BrowserError::PersistenceError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| BrowserError::PersistenceError(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get("likes").unwrap(), None);
        store.set("likes", "[]").unwrap();
        assert_eq!(store.get("likes").unwrap().as_deref(), Some("[]"));

        store.set("likes", "[1]").unwrap();
        assert_eq!(store.get("likes").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("likes", "[]").unwrap();
        assert_eq!(other.get("likes").unwrap().as_deref(), Some("[]"));
    }
}
