//! Termocolor Cart - session cart state and persistence.
//!
//! The cart for one browsing session lives in memory inside a [`CartStore`]
//! and is mirrored to a durable backing store after every mutation. On open,
//! the store hydrates from the backing store; a corrupt record is discarded
//! and erased rather than treated as fatal.
//!
//! # Modules
//!
//! - [`store`] - The cart store: mutations, aggregates, hydration
//! - [`storage`] - The key/value persistence contract and its backends

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod store;

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
