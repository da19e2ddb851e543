//! Runtime configuration read from the environment (after `.env` is loaded).
//!
//! - `WALLET_API_URL`: base URL of the wallet backend, default `http://localhost:8080`
//! - `WALLET_VIEW_OUTPUT`: file to write the rendered page to; stdout when unset

use std::path::PathBuf;
use reqwest::Url;
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid WALLET_API_URL {0:?}: {1}")]
    InvalidUrl(String, String),
    #[error("Unsupported scheme {0:?} in WALLET_API_URL, expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = non_empty("WALLET_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let parsed = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidUrl(api_url.clone(), e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(AppConfig {
            api_url,
            output_path: non_empty("WALLET_VIEW_OUTPUT").map(PathBuf::from),
        })
    }
}
