//! Configuration management
//!
//! Loads client configuration from the process environment with `.env`
//! file support. API credentials are carried for future authenticated
//! endpoints but are not attached to any request today.

use serde::{Deserialize, Serialize};

/// Default base URL for the Bybit V5 API
pub const DEFAULT_BASE_URL: &str = "https://api.bybit.com";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_secret: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads `BYBIT_BASE_URL` (falling back to the public mainnet URL),
    /// `API_KEY` and `SECRET_KEY`. A `.env` file in the working directory
    /// is honored when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = std::env::var("BYBIT_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Config {
            base_url,
            api_key: std::env::var("API_KEY").ok(),
            api_secret: std::env::var("SECRET_KEY").ok(),
        }
    }

    /// Override the base URL, normalizing trailing slashes
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

/// Strip trailing slashes so endpoint paths can be appended verbatim
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
