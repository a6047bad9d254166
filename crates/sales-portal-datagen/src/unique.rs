// crates/sales-portal-datagen/src/unique.rs
// ============================================================================
// Module: Uniqueness Ledger
// Description: Process-wide record of generated values that must not repeat.
// Purpose: Keep generated emails and product names unique across test threads.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The backend rejects duplicate customer emails and product names, so every
//! generated value of those kinds is claimed in a process-wide ledger before
//! it is returned. Caller overrides are never claimed.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Kinds of values tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueKind {
    /// Customer emails.
    Email,
    /// Product names.
    ProductName,
}

/// Claimed values keyed by kind.
type Claimed = HashSet<(UniqueKind, String)>;

/// Returns the process-wide ledger.
fn ledger() -> &'static Mutex<Claimed> {
    static LEDGER: OnceLock<Mutex<Claimed>> = OnceLock::new();
    LEDGER.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Claims `value` for `kind`; returns false when it was already claimed.
#[must_use]
pub fn claim(kind: UniqueKind, value: &str) -> bool {
    // A poisoned ledger still holds a consistent set; keep using it.
    let mut claimed = ledger().lock().unwrap_or_else(PoisonError::into_inner);
    claimed.insert((kind, value.to_string()))
}

/// Returns true when `value` has been claimed for `kind`.
#[must_use]
pub fn is_claimed(kind: UniqueKind, value: &str) -> bool {
    let claimed = ledger().lock().unwrap_or_else(PoisonError::into_inner);
    claimed.contains(&(kind, value.to_string()))
}

/// Returns a process-unique sequence number for disambiguating suffixes.
pub(crate) fn next_sequence() -> u64 {
    static SEQUENCE: AtomicU64 = AtomicU64::new(1);
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}
