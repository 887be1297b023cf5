use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main browser configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrowserConfig {
    /// Remote recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Where liked recipes are persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Rendering settings
    #[serde(default)]
    pub view: ViewConfig,
}

/// Configuration for the remote recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g. "https://forkify-api.herokuapp.com/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds; must be non-zero
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Number of attempts per request before giving up
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Initial delay between retries in milliseconds (grows with each attempt)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Configuration for the local key-value store
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key under which the liked recipes are stored
    #[serde(default = "default_likes_key")]
    pub likes_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            likes_key: default_likes_key(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".recipe-browser")
}

fn default_likes_key() -> String {
    "likes".to_string()
}

fn default_results_per_page() -> usize {
    10
}

impl BrowserConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_BROWSER__ prefix
/// 2. The given file, or config.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_BROWSER__API__BASE_URL
pub fn load_config(path: Option<&str>) -> Result<BrowserConfig, ConfigError> {
    let file = match path {
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_BROWSER__STORAGE__DATA_DIR
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
