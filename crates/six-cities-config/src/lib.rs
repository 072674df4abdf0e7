//! Configuration and file management for six-cities
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML, with environment overrides)
//! - Application configuration (AppConfig)
//! - Bearer token persistence (TokenStorage)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod token_store;

pub use app_config::{ApiConfig, AppConfig};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, token_path};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStorage, TokenStoreError, TOKEN_KEY};

/// Default REST backend
pub const DEFAULT_BASE_URL: &str = "https://14.design.htmlacademy.pro/six-cities";

/// Default client-wide request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
