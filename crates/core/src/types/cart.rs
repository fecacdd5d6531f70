//! Cart line item.
//!
//! The persisted cart record is a JSON array of these, with camelCase field
//! names (`productId`, `title`, `image`, `variant`, `price`, `quantity`,
//! `unit`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// One entry in the cart: a product variant and its quantity.
///
/// Display metadata (`title`, `image`) and the unit `price` are snapshotted
/// when the line is created and kept as-is for the life of the line, even if
/// the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog ID of the parent product.
    pub product_id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Product image URL at add time.
    pub image: String,
    /// Variant label; with `product_id` forms the line's unique key.
    pub variant: String,
    /// Unit price captured at add time (variant's minimum price).
    pub price: Decimal,
    /// Number of units; always positive in a persisted cart.
    pub quantity: u32,
    /// Package-quantity label, display-only.
    pub unit: String,
}

impl CartItem {
    /// Whether this line is keyed by the given `(product_id, variant)` pair.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant: &str) -> bool {
        self.product_id == *product_id && self.variant == variant
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whether the line is a valid persisted state: positive quantity and
    /// non-empty key fields.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.quantity > 0 && !self.product_id.is_empty() && !self.variant.is_empty()
    }
}
