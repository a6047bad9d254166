// crates/sales-portal-core/src/models/customer.rs
// ============================================================================
// Module: Customer Models
// Description: Customer payload and record shapes.
// Purpose: Mirror the backend customer contract on the wire.
// Dependencies: serde
// ============================================================================

//! Customer payload and record shapes.

use serde::Deserialize;
use serde::Serialize;

/// Payload for creating or updating a customer.
///
/// # Invariants
/// - Generated instances satisfy every rule in [`crate::constraints::check_customer`]; caller
///   overrides are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    /// Contact email, unique per customer.
    pub email: String,
    /// Full name.
    pub name: String,
    /// Country wire value (see [`crate::Country`]).
    pub country: String,
    /// City name.
    pub city: String,
    /// Street line.
    pub street: String,
    /// House number.
    pub house: i64,
    /// Flat number.
    pub flat: i64,
    /// Phone number with a leading `+`.
    pub phone: String,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Customer fields shared with the payload.
    #[serde(flatten)]
    pub data: CustomerData,
    /// Creation timestamp (`createdOn` on the wire).
    #[serde(rename = "createdOn", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
}
