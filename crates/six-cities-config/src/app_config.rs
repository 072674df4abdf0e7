//! Application configuration
//!
//! Configuration loaded from `.six-cities.toml`, with environment overrides
//! (`SIX_CITIES_BASE_URL`, `SIX_CITIES_TIMEOUT_MS`).

use crate::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENV_BASE_URL: &str = "SIX_CITIES_BASE_URL";
const ENV_TIMEOUT_MS: &str = "SIX_CITIES_TIMEOUT_MS";

/// REST backend settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-wide request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Application configuration loaded from .six-cities.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load config from the config file (or defaults), then apply
    /// environment overrides
    pub fn load() -> Self {
        let mut config = Self::from_file_content(crate::load_config_file());
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    fn from_file_content(content: Option<String>) -> Self {
        if let Some(content) = content {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Override values from the environment
    ///
    /// `lookup` resolves a variable name to its value.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            log::info!("Using base url from {}", ENV_BASE_URL);
            self.api.base_url = base_url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(timeout_ms) if timeout_ms > 0 => self.api.timeout_ms = timeout_ms,
                _ => log::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_MS, raw),
            }
        }
    }
}
