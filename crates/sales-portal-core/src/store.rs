// crates/sales-portal-core/src/store.rs
// ============================================================================
// Module: Created Entity Store
// Description: Thread-safe record of entity ids created during a test run.
// Purpose: Let teardown delete exactly what setup created.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`EntityStore`] is a cheap-to-clone handle over a shared set of order,
//! customer, and product ids. Parallel test threads track ids as they create
//! entities; teardown snapshots and clears them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Entity store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityStoreError {
    /// A thread panicked while holding the store lock.
    #[error("entity store mutex poisoned")]
    Poisoned,
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// Tracked ids, one set per entity kind.
#[derive(Debug, Default)]
struct TrackedIds {
    /// Order ids.
    orders: BTreeSet<String>,
    /// Customer ids.
    customers: BTreeSet<String>,
    /// Product ids.
    products: BTreeSet<String>,
}

/// Entity kinds tracked by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityKind {
    /// Orders.
    Order,
    /// Customers.
    Customer,
    /// Products.
    Product,
}

impl TrackedIds {
    /// Returns the set for `kind`.
    fn set_mut(&mut self, kind: EntityKind) -> &mut BTreeSet<String> {
        match kind {
            EntityKind::Order => &mut self.orders,
            EntityKind::Customer => &mut self.customers,
            EntityKind::Product => &mut self.products,
        }
    }

    /// Returns the set for `kind`.
    const fn set(&self, kind: EntityKind) -> &BTreeSet<String> {
        match kind {
            EntityKind::Order => &self.orders,
            EntityKind::Customer => &self.customers,
            EntityKind::Product => &self.products,
        }
    }
}

/// Shared store of created entity ids.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    /// Id sets protected by a mutex.
    ids: Arc<Mutex<TrackedIds>>,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a created order id. Empty ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn track_order(&self, id: &str) -> Result<(), EntityStoreError> {
        self.track(EntityKind::Order, id)
    }

    /// Records a created customer id. Empty ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn track_customer(&self, id: &str) -> Result<(), EntityStoreError> {
        self.track(EntityKind::Customer, id)
    }

    /// Records a created product id. Empty ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn track_product(&self, id: &str) -> Result<(), EntityStoreError> {
        self.track(EntityKind::Product, id)
    }

    /// Returns a sorted snapshot of tracked order ids.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn order_ids(&self) -> Result<Vec<String>, EntityStoreError> {
        self.snapshot(EntityKind::Order)
    }

    /// Returns a sorted snapshot of tracked customer ids.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn customer_ids(&self) -> Result<Vec<String>, EntityStoreError> {
        self.snapshot(EntityKind::Customer)
    }

    /// Returns a sorted snapshot of tracked product ids.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn product_ids(&self) -> Result<Vec<String>, EntityStoreError> {
        self.snapshot(EntityKind::Product)
    }

    /// Forgets every tracked id.
    ///
    /// # Errors
    ///
    /// Returns [`EntityStoreError::Poisoned`] when the lock is poisoned.
    pub fn clear(&self) -> Result<(), EntityStoreError> {
        let mut guard = self.ids.lock().map_err(|_| EntityStoreError::Poisoned)?;
        *guard = TrackedIds::default();
        Ok(())
    }

    /// Inserts a non-empty id into the set for `kind`.
    fn track(&self, kind: EntityKind, id: &str) -> Result<(), EntityStoreError> {
        if id.is_empty() {
            return Ok(());
        }
        self.ids
            .lock()
            .map_err(|_| EntityStoreError::Poisoned)?
            .set_mut(kind)
            .insert(id.to_string());
        Ok(())
    }

    /// Copies the set for `kind`.
    fn snapshot(&self, kind: EntityKind) -> Result<Vec<String>, EntityStoreError> {
        let guard = self.ids.lock().map_err(|_| EntityStoreError::Poisoned)?;
        Ok(guard.set(kind).iter().cloned().collect())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
