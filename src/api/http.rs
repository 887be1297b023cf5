use crate::api::RecipeApi;
use crate::config::ApiConfig;
use crate::error::BrowserError;
use crate::model::{RecipeDetail, RecipeResponse, RecipeSummary, SearchResponse};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

/// `RecipeApi` backed by a forkify-style HTTP service
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl HttpRecipeApi {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, BrowserError> {
        if config.timeout_ms == 0 {
            return Err(BrowserError::BuilderError(
                "api timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("Mozilla/5.0 (compatible; RecipeBrowser/0.1)")
            .build()
            .map_err(|e| BrowserError::BuilderError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpRecipeApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry_attempts: config.retry_attempts.max(1),
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        HttpRecipeApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            retry_attempts: 1,
            retry_delay_ms: 0,
        }
    }

    /// GET `{base_url}/{path}`, retrying transport failures and 5xx answers
    async fn get_text(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, String), BrowserError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut last_error = None;

        for attempt in 1..=self.retry_attempts {
            debug!(
                "GET {} {:?} (attempt {}/{})",
                url, query, attempt, self.retry_attempts
            );

            match self.client.get(&url).query(query).send().await {
                Ok(response) if response.status().is_server_error() => {
                    warn!(
                        "{} answered {} (attempt {}/{})",
                        url,
                        response.status(),
                        attempt,
                        self.retry_attempts
                    );
                    last_error = Some(BrowserError::NetworkError(format!(
                        "{} returned {}",
                        url,
                        response.status()
                    )));
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await?;
                    return Ok((status, body));
                }
                Err(e) => {
                    warn!(
                        "Request to {} failed (attempt {}/{}): {}",
                        url, attempt, self.retry_attempts, e
                    );
                    last_error = Some(BrowserError::from(e));
                }
            }

            if attempt < self.retry_attempts {
                // Backoff grows linearly with each attempt
                let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                debug!("Waiting {:?} before retry", delay);
                sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| BrowserError::NetworkError(format!("No request made to {}", url))))
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, BrowserError> {
        let (status, body) = self.get_text("search", &[("q", query)]).await?;
        if !status.is_success() {
            return Err(BrowserError::NetworkError(format!(
                "Search for '{}' failed with status: {}",
                query, status
            )));
        }

        let response: SearchResponse = serde_json::from_str(&body)?;
        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            return Err(BrowserError::NetworkError(error));
        }

        if let Some(count) = response.count {
            if count != response.recipes.len() {
                warn!(
                    "Search for '{}' reported {} recipes but returned {}",
                    query,
                    count,
                    response.recipes.len()
                );
            }
        }

        info!("Search for '{}' found {} recipes", query, response.recipes.len());
        Ok(response.recipes)
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeDetail, BrowserError> {
        let (status, body) = self.get_text("get", &[("rId", id)]).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(BrowserError::NotFoundError(format!("recipe {}", id)));
        }
        if !status.is_success() {
            return Err(BrowserError::NetworkError(format!(
                "Fetching recipe {} failed with status: {}",
                id, status
            )));
        }

        let response: RecipeResponse = serde_json::from_str(&body)?;
        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            debug!("API error for recipe {}: {}", id, error);
            return Err(BrowserError::NotFoundError(format!("recipe {}: {}", id, error)));
        }

        response
            .recipe
            .ok_or_else(|| BrowserError::NotFoundError(format!("recipe {}", id)))
    }
}
