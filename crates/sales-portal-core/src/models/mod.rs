// crates/sales-portal-core/src/models/mod.rs
// ============================================================================
// Module: Sales Portal Entity Models
// Description: Payload and record shapes for backend entities.
// Purpose: Share one typed definition between data generation and response parsing.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Payloads are what tests send to create or update an entity; records are
//! what the backend returns once it has assigned `_id` and `createdOn`.
//! Payload fields that carry enumerated values are plain strings so that
//! deliberately invalid overrides reach the backend untouched. Records use the
//! typed value sets where the backend owns the value.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod customer;
pub mod order;
pub mod product;
pub mod user;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use customer::Customer;
pub use customer::CustomerData;
pub use order::Comment;
pub use order::DeliveryAddress;
pub use order::DeliveryData;
pub use order::Order;
pub use order::OrderData;
pub use order::OrderHistoryEntry;
pub use order::OrderProduct;
pub use product::Product;
pub use product::ProductData;
pub use user::CreateUserPayload;
pub use user::Credentials;
pub use user::User;

// ============================================================================
// SECTION: Payload Trait
// ============================================================================

/// Request body sent to the backend.
pub trait WirePayload: Serialize {
    /// Renders the payload as its wire JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl WirePayload for CustomerData {}
impl WirePayload for ProductData {}
impl WirePayload for DeliveryData {}
impl WirePayload for OrderData {}
impl WirePayload for CreateUserPayload {}
impl WirePayload for Credentials {}
