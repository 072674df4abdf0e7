//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/six-cities/`, `~/.cache/six-cities/`
//! - macOS: `~/Library/Application Support/six-cities/`, `~/Library/Caches/six-cities/`
//! - Windows: `%APPDATA%\six-cities\`, `%LOCALAPPDATA%\six-cities\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "six-cities";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted token file
pub fn token_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storage.toml"))
}

/// Get path to app config file in the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
