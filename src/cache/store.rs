//! Cache storage implementation.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store of JSON documents, one file per key.
///
/// Each process run treats the directory as its own; concurrent writers
/// race and the last one wins.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the default location (`~/.autonode`).
    pub fn default_location() -> Self {
        Self::new(super::default_cache_dir())
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))
    }

    /// Get the file path for a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read and deserialize a cached document.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file {:?}", path))?;
        let value = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse cache file {:?}", path))?;

        Ok(Some(value))
    }

    /// Serialize and store a document.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;

        let path = self.path(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).with_context(|| format!("Failed to write cache file {:?}", path))?;

        Ok(())
    }

    /// Remove a cached document. Returns `false` if it did not exist.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn cache_store_creation() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        assert_eq!(store.root(), temp.path());
    }

    #[test]
    fn write_and_read() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("nested"));
        let sample = Sample {
            name: "iron".to_string(),
            count: 20,
        };

        store.write("sample.json", &sample).unwrap();
        let loaded: Sample = store.read("sample.json").unwrap().unwrap();

        assert_eq!(loaded, sample);
    }

    #[test]
    fn read_nonexistent_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());

        let loaded: Option<Sample> = store.read("missing.json").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn read_corrupt_file_errors() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        fs::write(store.path("bad.json"), "{not json").unwrap();

        let loaded: Result<Option<Sample>> = store.read("bad.json");
        assert!(loaded.is_err());
    }

    #[test]
    fn remove_entry() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        store.write("gone.json", &1u32).unwrap();

        assert!(store.remove("gone.json").unwrap());
        assert!(!store.remove("gone.json").unwrap());
    }
}
