use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Search or recipe fetch failed (transport failure or non-success status)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The requested recipe or shopping list item does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Reading or writing persisted likes failed
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// The API answered with a body we could not understand
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// A shopping list count was negative or not a number
    #[error("Invalid count: {0}")]
    InvalidCount(f64),

    /// An action needs a recipe but none is open
    #[error("No recipe is currently loaded")]
    NoRecipeLoaded,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for BrowserError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BrowserError::ParseError(err.to_string())
        } else {
            BrowserError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BrowserError {
    fn from(err: serde_json::Error) -> Self {
        BrowserError::ParseError(err.to_string())
    }
}
