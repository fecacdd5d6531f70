//! In-memory storage backend.

use std::collections::HashMap;

use super::{CartStorage, StorageError};

/// `HashMap`-backed storage for tests and ephemeral sessions.
///
/// Nothing survives the process; a cart opened on this backend behaves
/// exactly like one on [`super::FileStorage`] minus durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a record, bypassing the trait. Useful for setting up
    /// hydration scenarios in tests.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.records.insert(key.into(), value.into());
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        storage.save("cart", "[]").unwrap();
        assert_eq!(storage.load("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.load("cart").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let mut storage = MemoryStorage::new();
        storage.save("cart", "old").unwrap();
        storage.save("cart", "new").unwrap();
        assert_eq!(storage.load("cart").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut storage = MemoryStorage::new();
        storage.save("cart", "[]").unwrap();
        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();
        assert!(storage.load("cart").unwrap().is_none());
    }
}
