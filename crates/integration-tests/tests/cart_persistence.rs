//! Integration tests for cart persistence on the file backend.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use termocolor_cart::{CART_STORAGE_KEY, CartStorage, CartStore, FileStorage};
use termocolor_core::ProductId;
use termocolor_integration_tests::{sample_product, sample_variant};

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_cart_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::open(FileStorage::new(dir.path()));
    store.add_to_cart(&sample_product("P1"), &sample_variant("5L", Decimal::from(120)), 2);
    store.add_to_cart(&sample_product("P2"), &sample_variant("3kg", Decimal::from(80)), 1);
    let before = store.items().to_vec();
    drop(store);

    let reopened = CartStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.items(), &before[..]);
    assert_eq!(reopened.item_count(), 3);
    assert_eq!(reopened.total_price(), Decimal::from(320));
}

#[test]
fn test_record_is_written_under_fixed_key() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::open(FileStorage::new(dir.path()));
    store.add_to_cart(&sample_product("P1"), &sample_variant("5L", Decimal::from(120)), 1);

    assert!(dir.path().join(format!("{CART_STORAGE_KEY}.json")).exists());
}

#[test]
fn test_empty_open_leaves_prior_record_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = CartStore::open(FileStorage::new(dir.path()));
    store.add_to_cart(&sample_product("P1"), &sample_variant("5L", Decimal::from(120)), 2);
    drop(store);

    // Opening (and dropping) a store without mutating must not rewrite the
    // durable copy.
    let storage = FileStorage::new(dir.path());
    let raw_before = storage.load(CART_STORAGE_KEY).unwrap();
    let reopened = CartStore::open(FileStorage::new(dir.path()));
    drop(reopened);
    let raw_after = storage.load(CART_STORAGE_KEY).unwrap();

    assert_eq!(raw_before, raw_after);
    assert!(raw_before.is_some());
}

// ============================================================================
// Corrupt Record Recovery
// ============================================================================

#[test]
fn test_corrupt_file_yields_empty_cart_and_is_erased() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let store = CartStore::open(FileStorage::new(dir.path()));
    assert!(store.is_empty());
    assert!(!dir.path().join("cart.json").exists());
}

#[test]
fn test_invalid_line_in_file_discards_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"productId":"P1","title":"t","image":"i","variant":"5L","price":"120","quantity":2,"unit":"bucată"},
            {"productId":"","title":"t","image":"i","variant":"5L","price":"80","quantity":1,"unit":"bucată"}]"#,
    )
    .unwrap();

    let store = CartStore::open(FileStorage::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn test_recovered_cart_is_usable_and_persists_again() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "{broken").unwrap();

    let mut store = CartStore::open(FileStorage::new(dir.path()));
    store.add_to_cart(&sample_product("P1"), &sample_variant("5L", Decimal::from(120)), 1);
    drop(store);

    let reopened = CartStore::open(FileStorage::new(dir.path()));
    assert_eq!(reopened.item_count(), 1);
}

// ============================================================================
// Session Ownership
// ============================================================================

#[test]
fn test_last_write_wins_between_sessions() {
    let dir = tempfile::tempdir().unwrap();

    // Two independent sessions over the same durable scope: writes do not
    // merge, the later one replaces the record.
    let mut first = CartStore::open(FileStorage::new(dir.path()));
    let mut second = CartStore::open(FileStorage::new(dir.path()));

    first.add_to_cart(&sample_product("P1"), &sample_variant("5L", Decimal::from(120)), 2);
    second.add_to_cart(&sample_product("P2"), &sample_variant("3kg", Decimal::from(80)), 1);

    let next = CartStore::open(FileStorage::new(dir.path()));
    assert_eq!(next.items().len(), 1);
    assert_eq!(next.items()[0].product_id, ProductId::new("P2"));
}
