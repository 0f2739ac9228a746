mod support;

use std::sync::Arc;

use local_storefront::{
    error::AppError,
    models::CartEntry,
    render::{Page, RenderEvent},
    store::MemoryStore,
};
use support::{harness, harness_with, product};

#[test]
fn adding_twice_accumulates_one_entry() {
    let mut h = harness();

    h.shop.add_to_cart(1).unwrap();
    let applied = h.shop.add_to_cart(1).unwrap();

    assert_eq!(
        h.shop.state().cart,
        vec![CartEntry {
            product_id: 1,
            quantity: 2
        }]
    );
    assert_eq!(applied.notice, "Added iPhone 15 Pro to cart");
    assert_eq!(h.shop.cart_count(), 2);
    assert_eq!(h.renderer.last_cart_count(), Some(2));
    assert_eq!(h.renderer.toasts().len(), 2);
}

#[test]
fn unknown_product_alerts_and_changes_nothing() {
    let mut h = harness();

    let err = h.shop.add_to_cart(404).unwrap_err();

    assert!(matches!(err, AppError::ProductNotFound(404)));
    assert!(h.shop.state().cart.is_empty());
    assert_eq!(h.renderer.alerts(), vec![err.to_string()]);
    assert!(h.store.raw().is_none(), "nothing should be persisted");
}

#[test]
fn sold_out_product_cannot_be_added() {
    let mut h = harness_with(
        Some(vec![product(1, "Ghost", 10, 0)]),
        Arc::new(MemoryStore::new()),
    );

    let err = h.shop.add_to_cart(1).unwrap_err();

    assert!(matches!(err, AppError::SoldOut(ref name) if name == "Ghost"));
    assert!(h.shop.state().cart.is_empty());
    assert_eq!(h.renderer.alerts().len(), 1);
}

#[test]
fn adding_at_stock_limit_keeps_cart_unchanged() {
    let mut h = harness_with(
        Some(vec![product(1, "Limited", 10, 2)]),
        Arc::new(MemoryStore::new()),
    );
    h.shop.add_to_cart(1).unwrap();
    h.shop.add_to_cart(1).unwrap();
    let before = h.shop.state().cart.clone();
    let stored_before = h.store.raw();

    let err = h.shop.add_to_cart(1).unwrap_err();

    assert!(matches!(
        err,
        AppError::InsufficientStock { available: 2, .. }
    ));
    assert_eq!(h.shop.state().cart, before);
    assert_eq!(h.store.raw(), stored_before);
    assert_eq!(h.renderer.alerts().len(), 1);
}

#[test]
fn update_quantity_changes_entry_in_place() {
    let mut h = harness();
    h.shop.add_to_cart(3).unwrap();

    let applied = h.shop.update_quantity(3, 4).unwrap();

    assert_eq!(
        applied.value,
        Some(CartEntry {
            product_id: 3,
            quantity: 5
        })
    );
    assert_eq!(h.shop.state().cart_entry(3).map(|e| e.quantity), Some(5));
    assert_eq!(h.renderer.last_page(), Some(Page::Cart));
}

#[test]
fn update_to_zero_or_below_removes_entry() {
    let mut h = harness();
    h.shop.add_to_cart(2).unwrap();
    h.shop.add_to_cart(5).unwrap();

    let applied = h.shop.update_quantity(2, -10).unwrap();

    assert_eq!(applied.value, None);
    assert!(h.shop.state().cart_entry(2).is_none());
    assert_eq!(h.shop.state().cart.len(), 1);
    assert_eq!(h.renderer.last_cart_count(), Some(1));
}

#[test]
fn update_beyond_stock_is_rejected() {
    let mut h = harness_with(
        Some(vec![product(7, "Scarce", 99, 3)]),
        Arc::new(MemoryStore::new()),
    );
    h.shop.add_to_cart(7).unwrap();

    let err = h.shop.update_quantity(7, 3).unwrap_err();

    assert!(matches!(err, AppError::InsufficientStock { .. }));
    assert_eq!(h.shop.state().cart_entry(7).map(|e| e.quantity), Some(1));
}

#[test]
fn update_for_missing_entry_is_a_no_op() {
    let mut h = harness();
    h.renderer.clear();

    let applied = h.shop.update_quantity(1, 1).unwrap();

    assert_eq!(applied.value, None);
    assert!(h.shop.state().cart.is_empty());
    assert!(h.renderer.events().is_empty());
    assert!(h.store.raw().is_none());
}

#[test]
fn remove_deletes_entry_and_refreshes_views() {
    let mut h = harness();
    h.shop.add_to_cart(1).unwrap();
    h.shop.add_to_cart(4).unwrap();

    h.shop.remove_from_cart(1);
    // Removing twice is harmless.
    h.shop.remove_from_cart(1);

    assert_eq!(
        h.shop.state().cart,
        vec![CartEntry {
            product_id: 4,
            quantity: 1
        }]
    );
    let events = h.renderer.events();
    assert!(events.contains(&RenderEvent::CartCount(1)));
    assert_eq!(h.renderer.last_page(), Some(Page::Cart));
}

#[test]
fn cart_summary_prices_lines_from_catalog() {
    let mut h = harness();
    h.shop.add_to_cart(6).unwrap();
    h.shop.add_to_cart(6).unwrap();
    h.shop.add_to_cart(3).unwrap();

    let summary = h.shop.cart_summary();

    assert_eq!(summary.count, 3);
    assert_eq!(summary.items.len(), 2);
    assert_eq!(summary.items[0].line_total, 2 * 749);
    assert_eq!(summary.total_amount, 2 * 749 + 1999);
}
