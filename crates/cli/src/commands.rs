//! Cart commands.
//!
//! Thin wrappers over the store's mutation operations plus snapshot
//! printing. The store persists after each mutation on its own; persistence
//! problems surface as warnings in the log, never as command failures.

use rust_decimal::Decimal;

use termocolor_cart::{CartStorage, CartStore};
use termocolor_core::{PriceRange, Product, ProductId, ProductVariant};

/// Add a variant to the cart, building the catalog records from CLI args.
#[allow(clippy::too_many_arguments)]
pub fn add<S: CartStorage>(
    store: &mut CartStore<S>,
    product_id: &str,
    title: &str,
    image: &str,
    variant: &str,
    price: Decimal,
    unit: &str,
    quantity: u32,
) {
    let product = Product {
        id: ProductId::new(product_id),
        title: title.to_string(),
        image: image.to_string(),
    };
    let variant = ProductVariant {
        label: variant.to_string(),
        price_range: PriceRange::single(price),
        unit: unit.to_string(),
        // Availability is checked by callers before adding; from the CLI the
        // operator is the caller.
        available_for_sale: true,
    };
    store.add_to_cart(&product, &variant, quantity);
}

/// Remove a line from the cart.
pub fn remove<S: CartStorage>(store: &mut CartStore<S>, product_id: &str, variant: &str) {
    store.remove_from_cart(&ProductId::new(product_id), variant);
}

/// Set a line's quantity; zero removes the line.
pub fn set_quantity<S: CartStorage>(
    store: &mut CartStore<S>,
    product_id: &str,
    variant: &str,
    quantity: u32,
) {
    store.update_quantity(&ProductId::new(product_id), variant, quantity);
}

/// Empty the cart.
pub fn clear<S: CartStorage>(store: &mut CartStore<S>) {
    store.clear_cart();
}

/// Print the current snapshot: one row per line plus the aggregates.
#[allow(clippy::print_stdout)]
pub fn print_cart<S: CartStorage>(store: &CartStore<S>) {
    if store.is_empty() {
        println!("Cart is empty");
        return;
    }

    for line in store.items() {
        println!(
            "{} | {} {} | {} x {} = {}",
            line.product_id,
            line.variant,
            line.unit,
            line.quantity,
            line.price,
            line.line_total()
        );
    }
    println!("items: {}  total: {}", store.item_count(), store.total_price());
}
