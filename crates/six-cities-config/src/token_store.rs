//! Bearer token persistence
//!
//! The token lives in a small key-value TOML file in the config directory,
//! under one fixed key. There is no expiry: a stored token is trusted until
//! the server rejects a request made with it.
//!
//! ```toml
//! [meta]
//! last_modified = "2024-05-01T10:00:00Z"
//! version = 1
//!
//! [entries]
//! six-cities-token = "T2xpdmVyLmNvbm5lckBnbWFpbC5jb20="
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Storage key the bearer token is kept under
pub const TOKEN_KEY: &str = "six-cities-token";

const STORAGE_VERSION: u32 = 1;

/// Errors raised while persisting the token
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("failed to write token storage {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize token storage: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persistent bearer token storage
///
/// Implementations must be `Send + Sync`: the HTTP client reads the token
/// from async tasks while the app saves or drops it.
pub trait TokenStorage: Send + Sync {
    /// The stored token, if any
    fn get(&self) -> Option<String>;

    /// Store `token`, replacing any previous one
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Forget the stored token (no-op when none is stored)
    fn drop_token(&self) -> Result<(), TokenStoreError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageMeta {
    last_modified: DateTime<Utc>,
    version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageFile {
    meta: StorageMeta,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl StorageFile {
    fn new(entries: BTreeMap<String, String>) -> Self {
        Self {
            meta: StorageMeta {
                last_modified: Utc::now(),
                version: STORAGE_VERSION,
            },
            entries,
        }
    }
}

/// File-backed token storage
///
/// The file is read once on open; afterwards the in-memory copy is
/// authoritative and every change is written through.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileTokenStore {
    /// Open the store at the default location (see [`crate::token_path`])
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::open(crate::token_path()?))
    }

    /// Open the store at `path`
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load_from_path(&path) {
            Ok(Some(file)) => {
                log::info!("Loaded token storage from {:?}", path);
                file.entries
            }
            Ok(None) => {
                log::debug!("No token storage at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable token storage {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_path(path: &Path) -> anyhow::Result<Option<StorageFile>> {
        use anyhow::Context;

        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read token storage: {:?}", path))?;
        let file = toml::from_str(&content)
            .with_context(|| format!("Failed to parse token storage: {:?}", path))?;
        Ok(Some(file))
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        let content = toml::to_string_pretty(&StorageFile::new(entries.clone()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| TokenStoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| TokenStoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("Saved token storage to {:?}", self.path);
        Ok(())
    }
}

impl TokenStorage for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.entries().get(TOKEN_KEY).cloned()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut entries = self.entries();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.persist(&entries)
    }

    fn drop_token(&self) -> Result<(), TokenStoreError> {
        let mut entries = self.entries();
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.persist(&entries)
    }
}

/// In-process token storage, nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn token(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStorage for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token().clone()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token() = Some(token.to_string());
        Ok(())
    }

    fn drop_token(&self) -> Result<(), TokenStoreError> {
        *self.token() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path().join("storage.toml"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.toml");

        let store = FileTokenStore::open(&path);
        store.save("secret-token").unwrap();
        assert_eq!(store.get().as_deref(), Some("secret-token"));

        let reopened = FileTokenStore::open(&path);
        assert_eq!(reopened.get().as_deref(), Some("secret-token"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[meta]"));
        assert!(content.contains(TOKEN_KEY));
    }

    #[test]
    fn test_file_store_drop_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.toml");

        let store = FileTokenStore::open(&path);
        store.save("secret-token").unwrap();
        store.drop_token().unwrap();
        assert_eq!(store.get(), None);

        let reopened = FileTokenStore::open(&path);
        assert_eq!(reopened.get(), None);
    }

    #[test]
    fn test_drop_without_token_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.toml");

        let store = FileTokenStore::open(&path);
        store.drop_token().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.toml");
        fs::write(&path, "this is not [ toml").unwrap();

        let store = FileTokenStore::open(&path);
        assert_eq!(store.get(), None);

        // Saving repairs the file
        store.save("fresh").unwrap();
        assert_eq!(FileTokenStore::open(&path).get().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.save("def").unwrap();
        assert_eq!(store.get().as_deref(), Some("def"));
        store.drop_token().unwrap();
        assert_eq!(store.get(), None);
    }
}
