//! Termocolor Core - Shared types library.
//!
//! This crate provides the common types used across all Termocolor components:
//! - `cart` - Session cart store and persistence
//! - `cli` - Command-line cart inspection and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identity, catalog display data, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
