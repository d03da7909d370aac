//! In-memory implementation of KVStore

use super::types::{KVError, KVStore};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory implementation of KVStore
///
/// Simple hash map based storage, useful for testing and single-process use.
/// Nothing survives the process.
pub struct MemKV {
    entries: Mutex<HashMap<String, String>>,
}

impl MemKV {
    /// Create a new empty MemKV store
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for MemKV {
    fn default() -> Self {
        Self::new()
    }
}

impl KVStore for MemKV {
    async fn read(&self, key: &str) -> Result<Option<String>, KVError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), KVError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KVError> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), KVError> {
        self.entries.lock().clear();
        Ok(())
    }
}
