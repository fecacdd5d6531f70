//! Catalog types supplied by the product backend.
//!
//! These are the inputs to `add_to_cart`: the cart snapshots what it needs
//! from them at add time and never re-fetches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// Price range across a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Minimum price among all package sizes.
    pub min_price: Decimal,
    /// Maximum price among all package sizes.
    pub max_price: Decimal,
}

impl PriceRange {
    /// A range with a single price point.
    #[must_use]
    pub const fn single(price: Decimal) -> Self {
        Self {
            min_price: price,
            max_price: price,
        }
    }
}

/// Product display data from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Main image URL.
    pub image: String,
}

/// A purchasable variant of a product (e.g., package size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant label (e.g., "5L", "20kg"); together with the product ID it
    /// identifies a cart line.
    pub label: String,
    /// Price range for this variant; the cart captures the minimum.
    pub price_range: PriceRange,
    /// Package-quantity label (e.g., "bucată", "set"), display-only.
    pub unit: String,
    /// Whether the variant is currently purchasable. The cart does not check
    /// this; callers decide before adding.
    pub available_for_sale: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_single() {
        let range = PriceRange::single(Decimal::new(12050, 2));
        assert_eq!(range.min_price, range.max_price);
        assert_eq!(range.min_price, Decimal::new(12050, 2));
    }
}
