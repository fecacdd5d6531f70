//! Core types for Termocolor.
//!
//! This module provides the domain types shared by the cart store and the CLI.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::CartItem;
pub use id::ProductId;
pub use product::{PriceRange, Product, ProductVariant};
