//! The cart store.
//!
//! Holds the authoritative in-memory cart for one session, keeps the derived
//! aggregates consistent, and mirrors every mutation to the durable backing
//! store. Reads always reflect the latest completed mutation; there is no
//! in-flight state.
//!
//! Failure policy: load problems degrade to an empty cart, corrupt records
//! are discarded and erased, and a failed persist keeps the in-memory state
//! authoritative for the rest of the session. The next mutation writes the
//! full cart again, so a recovered backend catches up on its own.

use rust_decimal::Decimal;
use thiserror::Error;

use termocolor_core::{CartItem, Product, ProductId, ProductVariant};

use crate::storage::{CartStorage, StorageError};

/// Fixed key identifying "the cart" in the durable store.
pub const CART_STORAGE_KEY: &str = "cart";

/// Why a persisted cart record was rejected at hydration.
#[derive(Debug, Error)]
enum RecordError {
    #[error("malformed cart record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("cart record line {0} has zero quantity or empty key fields")]
    Invalid(usize),
}

/// Why a mutation could not be mirrored to the durable store.
#[derive(Debug, Error)]
enum PersistError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The session cart: an ordered line-item collection plus derived aggregates,
/// synchronized with a durable backing store.
///
/// The store exclusively owns both copies. External callers observe the
/// current snapshot through [`items`](Self::items) and the aggregate getters
/// and mutate only through the four operations.
pub struct CartStore<S: CartStorage> {
    storage: S,
    items: Vec<CartItem>,
    item_count: u32,
    total_price: Decimal,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart for a session, hydrating from the backing store.
    ///
    /// No prior record means an empty cart. A record that fails to parse or
    /// validate is discarded and erased from storage; this is a local
    /// recovery, not a failure. `open` itself never writes the cart record,
    /// so an empty startup state cannot clobber previously saved data.
    pub fn open(mut storage: S) -> Self {
        let items = match storage.load(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match parse_record(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Discarding corrupt cart record: {e}");
                    if let Err(e) = storage.remove(CART_STORAGE_KEY) {
                        tracing::warn!("Failed to erase corrupt cart record: {e}");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load cart, starting empty: {e}");
                Vec::new()
            }
        };

        let mut store = Self {
            storage,
            items,
            item_count: 0,
            total_price: Decimal::ZERO,
        };
        store.recompute();
        store
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of a product variant.
    ///
    /// If a line with the same `(product_id, variant)` key already exists its
    /// quantity is incremented and the originally captured price, title and
    /// image are kept. Otherwise a new line is appended, snapshotting the
    /// product's display fields and the variant's minimum price.
    ///
    /// A zero quantity is ignored with a warning; it would violate the
    /// positive-quantity invariant.
    pub fn add_to_cart(&mut self, product: &Product, variant: &ProductVariant, quantity: u32) {
        if quantity == 0 {
            tracing::warn!(
                product_id = %product.id,
                variant = %variant.label,
                "Ignoring add_to_cart with zero quantity"
            );
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(&product.id, &variant.label))
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                title: product.title.clone(),
                image: product.image.clone(),
                variant: variant.label.clone(),
                price: variant.price_range.min_price,
                quantity,
                unit: variant.unit.clone(),
            });
        }
        self.commit();
    }

    /// Remove the line keyed by `(product_id, variant)`. Silently does
    /// nothing when no such line exists.
    pub fn remove_from_cart(&mut self, product_id: &ProductId, variant: &str) {
        self.items.retain(|line| !line.matches(product_id, variant));
        self.commit();
    }

    /// Set the quantity of the line keyed by `(product_id, variant)`.
    ///
    /// A quantity of zero behaves exactly like
    /// [`remove_from_cart`](Self::remove_from_cart). When no line matches,
    /// nothing changes.
    pub fn update_quantity(&mut self, product_id: &ProductId, variant: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_id, variant);
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product_id, variant))
        {
            line.quantity = quantity;
        }
        self.commit();
    }

    /// Empty the cart; the empty state is written to the backing store.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// Consume the store and return the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Recompute aggregates and mirror the full cart to the backing store.
    /// Every mutation ends here.
    fn commit(&mut self) {
        self.recompute();
        if let Err(e) = self.persist() {
            tracing::warn!("Cart not persisted, keeping in-memory state: {e}");
        }
    }

    fn recompute(&mut self) {
        self.item_count = self.items.iter().map(|line| line.quantity).sum();
        self.total_price = self.items.iter().map(CartItem::line_total).sum();
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        let record = serde_json::to_string(&self.items)?;
        self.storage.save(CART_STORAGE_KEY, &record)?;
        Ok(())
    }
}

/// Parse and validate a persisted cart record. Any invalid line rejects the
/// whole record; hydration then starts from an empty cart.
fn parse_record(raw: &str) -> Result<Vec<CartItem>, RecordError> {
    let items: Vec<CartItem> = serde_json::from_str(raw)?;
    if let Some(index) = items.iter().position(|line| !line.is_valid()) {
        return Err(RecordError::Invalid(index));
    }
    Ok(items)
}
