//! Application configuration.
//!
//! Configuration is read from `trivia-browse.yaml` in the working directory
//! (or an explicit path) and includes:
//! - Base URL of the trivia API
//! - Collection name used in endpoint paths
//! - HTTP timeouts

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BrowseError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "trivia-browse.yaml";

/// Environment variable overriding `base_url`
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection segment of endpoint paths (`items`, or `questions` for the
    /// original trivia backend)
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Total request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_collection() -> String {
    "items".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file in the working directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Load configuration from the default location, or return the default
    /// if no file exists. The environment override is applied either way.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL parses and the collection is a single path
    /// segment.
    pub fn validate(&self) -> Result<()> {
        self.api_url()?;

        let collection = self.collection.trim();
        if collection.is_empty() || collection.contains('/') {
            return Err(BrowseError::Config(format!(
                "invalid collection '{}', expected a single path segment",
                self.collection
            )));
        }
        Ok(())
    }

    /// Parsed base URL
    pub fn api_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            BrowseError::Config(format!("invalid base_url '{}': {e}", self.base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(BrowseError::Config(format!(
                "base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
