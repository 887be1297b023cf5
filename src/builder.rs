use std::path::PathBuf;
use std::time::Duration;

use crate::{
    AppState, BrowserConfig, BrowserError, FileStore, HttpRecipeApi, KeyValueStore, Likes,
    RecipeApi,
};

/// A ready-to-use browser session: state plus the collaborators it talks to
pub struct RecipeBrowser {
    pub state: AppState,
    pub api: Box<dyn RecipeApi>,
    pub results_per_page: usize,
    /// Request timeout the HTTP client was configured with
    pub timeout: Duration,
}

/// Builder for configuring a browser session
#[derive(Default)]
pub struct RecipeBrowserBuilder {
    config: Option<BrowserConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    data_dir: Option<PathBuf>,
    api: Option<Box<dyn RecipeApi>>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl RecipeBrowserBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the recipe API base URL
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .base_url("http://localhost:8080/api");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Directory where liked recipes are saved
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use a custom recipe API instead of the HTTP client
    pub fn api(mut self, api: Box<dyn RecipeApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Use a custom key-value store instead of files under the data directory
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{MemoryStore, RecipeBrowser};
    ///
    /// let browser = RecipeBrowser::builder()
    ///     .store(Box::new(MemoryStore::new()))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(browser.state.likes.num_likes(), 0);
    /// ```
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Assemble the session and restore saved likes
    ///
    /// # Errors
    /// Returns `BrowserError::BuilderError` if the HTTP client cannot be created,
    /// the results page size is zero or the request timeout is zero.
    pub fn build(self) -> Result<RecipeBrowser, BrowserError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(url) = self.base_url {
            config.api.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            // Whole milliseconds; anything non-zero below 1 ms becomes 1 ms
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            config.api.timeout_ms = if timeout.is_zero() { 0 } else { millis.max(1) };
        }
        if let Some(dir) = self.data_dir {
            config.storage.data_dir = dir;
        }

        if config.view.results_per_page == 0 {
            return Err(BrowserError::BuilderError(
                "results_per_page must be at least 1".to_string(),
            ));
        }
        if config.api.timeout_ms == 0 {
            return Err(BrowserError::BuilderError(
                "api timeout must be greater than zero".to_string(),
            ));
        }

        let api = match self.api {
            Some(api) => api,
            None => Box::new(HttpRecipeApi::new(&config.api)?),
        };
        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Box::new(FileStore::new(config.storage.data_dir.clone())),
        };

        let likes = Likes::new(store, config.storage.likes_key.clone());

        Ok(RecipeBrowser {
            state: AppState::restore(likes),
            api,
            results_per_page: config.view.results_per_page,
            timeout: Duration::from_millis(config.api.timeout_ms),
        })
    }
}

impl RecipeBrowser {
    /// Creates a new builder for a browser session
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, RecipeDetail, RecipeSummary};
    use async_trait::async_trait;

    struct OfflineApi;

    #[async_trait]
    impl RecipeApi for OfflineApi {
        async fn search(&self, _query: &str) -> Result<Vec<RecipeSummary>, BrowserError> {
            Err(BrowserError::NetworkError("offline".to_string()))
        }

        async fn get_recipe(&self, id: &str) -> Result<RecipeDetail, BrowserError> {
            Err(BrowserError::NotFoundError(id.to_string()))
        }
    }

    #[test]
    fn test_build_restores_likes() {
        let store = MemoryStore::new();
        store
            .set(
                "likes",
                r#"[{"id":"42","title":"Pizza Dip","author":"Closet Cooking","image":""}]"#,
            )
            .unwrap();

        let browser = RecipeBrowser::builder()
            .store(Box::new(store))
            .build()
            .unwrap();
        assert!(browser.state.likes.is_liked("42"));
        assert_eq!(browser.results_per_page, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = BrowserConfig::default();
        config.view.results_per_page = 0;

        let result = RecipeBrowser::builder()
            .config(config)
            .store(Box::new(MemoryStore::new()))
            .build();
        assert!(matches!(result, Err(BrowserError::BuilderError(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = RecipeBrowser::builder()
            .timeout(Duration::ZERO)
            .store(Box::new(MemoryStore::new()))
            .build();
        assert!(matches!(result, Err(BrowserError::BuilderError(_))));

        let mut config = BrowserConfig::default();
        config.api.timeout_ms = 0;
        let result = RecipeBrowser::builder()
            .config(config)
            .api(Box::new(OfflineApi))
            .store(Box::new(MemoryStore::new()))
            .build();
        assert!(matches!(result, Err(BrowserError::BuilderError(_))));
    }

    #[test]
    fn test_timeout_keeps_milliseconds() {
        let browser = RecipeBrowser::builder()
            .timeout(Duration::from_millis(1500))
            .store(Box::new(MemoryStore::new()))
            .build()
            .unwrap();
        assert_eq!(browser.timeout, Duration::from_millis(1500));

        let browser = RecipeBrowser::builder()
            .timeout(Duration::from_micros(200))
            .store(Box::new(MemoryStore::new()))
            .build()
            .unwrap();
        assert_eq!(browser.timeout, Duration::from_millis(1));
    }

    #[test]
    fn test_likes_key_from_config() {
        let store = MemoryStore::new();
        let mut config = BrowserConfig::default();
        config.storage.likes_key = "favourites".to_string();

        let mut browser = RecipeBrowser::builder()
            .config(config)
            .store(Box::new(store.clone()))
            .build()
            .unwrap();
        browser.state.likes.add_like("1", "Soup", "", "");

        assert!(store.get("favourites").unwrap().is_some());
        assert!(store.get("likes").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_custom_api() {
        let browser = RecipeBrowser::builder()
            .api(Box::new(OfflineApi))
            .store(Box::new(MemoryStore::new()))
            .build()
            .unwrap();

        let result = browser.api.get_recipe("1").await;
        assert!(matches!(result, Err(BrowserError::NotFoundError(_))));
    }
}
