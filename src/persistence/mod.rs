//! Key/value persistence for high scores and settings
//!
//! Backends:
//! - `MemoryStorage`: in-process map (tests, headless runs)
//! - `FileStorage`: one JSON file per key in a directory (native)
//! - `LocalStorage`: browser LocalStorage (wasm32)
//!
//! Readers treat every error as "no data"; only writes report failures.

use std::collections::HashMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string key/value store
pub trait Storage {
    /// Read a value; `Ok(None)` when the key has never been written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write a value, replacing any previous one
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::default();
        assert!(storage.read("k").unwrap().is_none());
        storage.write("k", "v1").unwrap();
        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::Unavailable("no window".to_string());
        assert_eq!(err.to_string(), "storage unavailable: no window");
    }
}
