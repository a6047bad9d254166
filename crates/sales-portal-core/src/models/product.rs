// crates/sales-portal-core/src/models/product.rs
// ============================================================================
// Module: Product Models
// Description: Product payload and record shapes.
// Purpose: Mirror the backend product contract on the wire.
// Dependencies: serde
// ============================================================================

//! Product payload and record shapes.

use serde::Deserialize;
use serde::Serialize;

/// Payload for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    /// Product name, unique per product.
    pub name: String,
    /// Units in stock.
    pub amount: i64,
    /// Unit price.
    pub price: i64,
    /// Manufacturer wire value (see [`crate::Manufacturer`]).
    pub manufacturer: String,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Product fields shared with the payload.
    #[serde(flatten)]
    pub data: ProductData,
    /// Creation timestamp (`createdOn` on the wire).
    #[serde(rename = "createdOn", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
}
