// crates/sales-portal-core/src/store/tests.rs
// ============================================================================
// Module: Entity Store Unit Tests
// Description: Checks tracking, snapshots, and clearing of entity ids.
// Purpose: Ensure teardown sees every id created by parallel tests.
// Dependencies: sales-portal-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::thread;

use super::*;

#[test]
fn tracks_ids_per_kind_and_ignores_empty() {
    let store = EntityStore::new();
    store.track_order("o1").unwrap();
    store.track_order("").unwrap();
    store.track_customer("c1").unwrap();
    store.track_product("p2").unwrap();
    store.track_product("p1").unwrap();
    store.track_product("p1").unwrap();
    assert_eq!(store.order_ids().unwrap(), vec!["o1"]);
    assert_eq!(store.customer_ids().unwrap(), vec!["c1"]);
    assert_eq!(store.product_ids().unwrap(), vec!["p1", "p2"]);
}

#[test]
fn clear_forgets_everything() {
    let store = EntityStore::new();
    store.track_order("o1").unwrap();
    store.track_customer("c1").unwrap();
    store.clear().unwrap();
    assert!(store.order_ids().unwrap().is_empty());
    assert!(store.customer_ids().unwrap().is_empty());
    assert!(store.product_ids().unwrap().is_empty());
}

#[test]
fn clones_share_state_across_threads() {
    let store = EntityStore::new();
    let handles: Vec<_> = (0..8)
        .map(|index| {
            let store = store.clone();
            thread::spawn(move || store.track_customer(&format!("c{index}")).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.customer_ids().unwrap().len(), 8);
}
