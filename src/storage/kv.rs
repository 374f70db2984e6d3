//! String-keyed value stores
//!
//! Every piece of persisted state is one value under one key, written and
//! replaced as a whole. `FileStore` keeps each key in its own JSON file;
//! `MemoryStore` keeps everything in a map.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::file_io::{read_optional, remove_if_exists, write_atomic};
use crate::error::{LedgerError, LedgerResult};

/// A flat key/value store with whole-value overwrites
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> LedgerResult<()>;

    /// Remove every key
    fn clear(&self) -> LedgerResult<()>;
}

/// Keys become file names, so only `[A-Za-z0-9_]` is allowed
fn validate_key(key: &str) -> LedgerResult<()> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(LedgerError::Storage(format!("Invalid storage key: '{}'", key)));
    }
    Ok(())
}

/// Read and parse a value; absent or malformed values yield `None`
pub fn read_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Serialize and store a value
pub fn write_value<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> LedgerResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    debug!(key, bytes = raw.len(), "stored value");
    Ok(())
}

/// One JSON file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        remove_if_exists(self.path_for(key)?)
    }

    fn clear(&self) -> LedgerResult<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            LedgerError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| LedgerError::Storage(format!("Failed to list store: {}", e)))?
                .path();
            if path.extension().is_some_and(|ext| ext == "json" || ext == "tmp") {
                remove_if_exists(&path)?;
            }
        }

        Ok(())
    }
}

/// In-process store, nothing touches the disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        validate_key(key)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.remove(key);
        Ok(())
    }

    fn clear(&self) -> LedgerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert!(store.get("app_users").unwrap().is_none());

        store.set("app_users", "[]").unwrap();
        assert_eq!(store.get("app_users").unwrap().as_deref(), Some("[]"));

        store.set("app_users", "[1]").unwrap();
        assert_eq!(store.get("app_users").unwrap().as_deref(), Some("[1]"));

        store.remove("app_users").unwrap();
        store.remove("app_users").unwrap();
        assert!(store.get("app_users").unwrap().is_none());

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.clear().unwrap();
        assert!(store.get("a").unwrap().is_none());
        assert!(store.get("b").unwrap().is_none());
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("store"));
        exercise(&store);
    }

    #[test]
    fn test_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        store.set("app_theme_mode", "\"dark\"").unwrap();
        assert!(temp_dir.path().join("app_theme_mode.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(MemoryStore::new().set("", "x").is_err());
    }

    #[test]
    fn test_read_value_fails_closed() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        assert!(read_value::<Vec<u32>>(&store, "k").is_none());
        assert!(read_value::<Vec<u32>>(&store, "missing").is_none());

        write_value(&store, "k", &vec![1u32, 2]).unwrap();
        assert_eq!(read_value::<Vec<u32>>(&store, "k"), Some(vec![1, 2]));
    }
}
