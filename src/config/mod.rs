//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the CourtListener API token
pub const TOKEN_ENV: &str = "COURTLISTENER_API_TOKEN";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CourtListener API settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

/// Settings for the CourtListener API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API token; falls back to the COURTLISTENER_API_TOKEN environment variable
    #[serde(default = "default_token")]
    pub token: Option<String>,

    /// Base URL for the REST collection endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for the full-text search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            base_url: default_base_url(),
            search_url: default_search_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_token() -> Option<String> {
    std::env::var(TOKEN_ENV).ok()
}

fn default_base_url() -> String {
    "https://www.courtlistener.com/api/rest/v4/".to_string()
}

fn default_search_url() -> String {
    "https://www.courtlistener.com/api/rest/v3/search/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("COURTLISTENER"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

/// Look for a config file in the working directory, then the platform
/// config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("courtlistener-mcp.toml");
    if local.exists() {
        return Some(local);
    }

    let global = dirs::config_dir()?
        .join("courtlistener-mcp")
        .join("config.toml");
    if global.exists() {
        return Some(global);
    }

    None
}
