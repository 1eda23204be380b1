//! Durable key-value storage backends
//!
//! The store keeps two independent records, each a JSON string under its own
//! key. Backends only move strings; parsing belongs to the store.

use std::collections::HashMap;

use crate::config::paths::VoyagePaths;
use crate::error::VoyageResult;

use super::file_io::{read_text, write_atomic};

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> VoyageResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> VoyageResult<()>;
}

/// One JSON file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: VoyagePaths,
}

impl FileStore {
    /// Create a file store, making sure the data directory exists
    pub fn new(paths: VoyagePaths) -> VoyageResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &VoyagePaths {
        &self.paths
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> VoyageResult<Option<String>> {
        read_text(self.paths.record_file(key))
    }

    fn set(&mut self, key: &str, value: &str) -> VoyageResult<()> {
        write_atomic(self.paths.record_file(key), value)
    }
}

/// Volatile storage; contents are lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any serialization
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> VoyageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> VoyageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VoyagePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = FileStore::new(paths.clone()).unwrap();

        assert!(paths.data_dir().exists());
        assert_eq!(store.get("voyage_trips").unwrap(), None);

        store.set("voyage_trips", "[]").unwrap();
        assert_eq!(store.get("voyage_trips").unwrap().as_deref(), Some("[]"));
        assert!(paths.trips_file().exists());
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VoyagePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut store = FileStore::new(paths).unwrap();

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.raw("k"), Some("v"));

        store.insert_raw("k", "not json");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("not json"));
    }
}
