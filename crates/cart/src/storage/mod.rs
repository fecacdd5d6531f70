//! Key/value persistence contract for session-scoped cart state.
//!
//! A backend stores one serialized string per key. The cart store is the
//! sole reader and writer of its key within a session; there is no
//! cross-session locking, so the last write wins on the next load.

use thiserror::Error;

mod fs;
mod memory;

pub use fs::FileStorage;
pub use memory::MemoryStorage;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (backend unavailable, quota exceeded, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is not usable by this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A durable key/value store for serialized records.
pub trait CartStorage {
    /// Load the record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read. A missing
    /// record is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails or the key is invalid.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record stored under `key`. Deleting an absent record is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
