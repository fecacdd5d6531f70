//! Integration tests for Termocolor.
//!
//! The tests exercise the cart store against the real file backend in
//! temporary directories; nothing here needs a server or external
//! credentials.
//!
//! # Test Categories
//!
//! - `cart_persistence` - On-disk round trips, corrupt-record recovery,
//!   session ownership of the durable record
//! - `cart_lifecycle` - Mutation sequences and aggregate consistency
//!
//! Run with: `cargo test -p termocolor-integration-tests`

use rust_decimal::Decimal;

use termocolor_core::{PriceRange, Product, ProductId, ProductVariant};

/// Catalog product fixture.
#[must_use]
pub fn sample_product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image: format!("/images/{id}.webp"),
    }
}

/// Catalog variant fixture with a single price point.
#[must_use]
pub fn sample_variant(label: &str, price: Decimal) -> ProductVariant {
    ProductVariant {
        label: label.to_string(),
        price_range: PriceRange::single(price),
        unit: "bucată".to_string(),
        available_for_sale: true,
    }
}
