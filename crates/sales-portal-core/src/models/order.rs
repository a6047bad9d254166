// crates/sales-portal-core/src/models/order.rs
// ============================================================================
// Module: Order Models
// Description: Order, delivery, comment, and history shapes.
// Purpose: Mirror the backend order contract on the wire.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Orders are the only nested records: they embed the customer record, product
//! line items, an optional delivery, comments, a history trail, and an
//! optional assigned manager.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::enums::DeliveryCondition;
use crate::enums::OrderHistoryAction;
use crate::enums::OrderStatus;
use crate::models::customer::Customer;
use crate::models::user::User;

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Payload for creating or updating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderData {
    /// Customer identifier.
    pub customer: String,
    /// Product identifiers, distinct.
    pub products: Vec<String>,
}

/// Delivery address, shared by the delivery payload and the order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Country wire value.
    pub country: String,
    /// City name.
    pub city: String,
    /// Street line.
    pub street: String,
    /// House number.
    pub house: i64,
    /// Flat number.
    pub flat: i64,
}

/// Payload for scheduling or editing an order delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryData {
    /// Destination address.
    pub address: DeliveryAddress,
    /// Delivery condition wire value (see [`DeliveryCondition`]).
    pub condition: String,
    /// Delivery date formatted `YYYY/MM/DD` (`finalDate` on the wire).
    #[serde(rename = "finalDate")]
    pub final_date: String,
}

impl DeliveryData {
    /// Returns the typed delivery condition when the wire value is valid.
    #[must_use]
    pub fn condition_kind(&self) -> Option<DeliveryCondition> {
        self.condition.parse().ok()
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Product line item inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Product identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Product name.
    pub name: String,
    /// Ordered amount.
    pub amount: i64,
    /// Unit price.
    pub price: i64,
    /// Manufacturer wire value.
    pub manufacturer: String,
    /// Notes copied from the product.
    #[serde(default)]
    pub notes: String,
    /// Whether the line item has been received.
    pub received: bool,
}

/// Comment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Comment body.
    pub text: String,
    /// Creation timestamp.
    #[serde(rename = "createdOn")]
    pub created_on: String,
}

/// One entry of the order history trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    /// Order status after the change.
    pub status: OrderStatus,
    /// Customer identifier at the time of the change.
    pub customer: String,
    /// Line items at the time of the change.
    pub products: Vec<OrderProduct>,
    /// Order total at the time of the change.
    pub total_price: f64,
    /// Delivery at the time of the change.
    pub delivery: Option<DeliveryData>,
    /// Assigned manager at the time of the change.
    #[serde(rename = "assignedManager")]
    pub assigned_manager: Option<User>,
    /// Timestamp of the change.
    #[serde(rename = "changedOn")]
    pub changed_on: String,
    /// Action that produced the entry.
    pub action: OrderHistoryAction,
    /// User who performed the action.
    pub performer: User,
}

/// Order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Current status.
    pub status: OrderStatus,
    /// Ordering customer.
    pub customer: Customer,
    /// Line items.
    pub products: Vec<OrderProduct>,
    /// Order total.
    pub total_price: f64,
    /// Creation timestamp.
    #[serde(rename = "createdOn")]
    pub created_on: String,
    /// Comments in creation order.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Scheduled delivery, if any.
    #[serde(default)]
    pub delivery: Option<DeliveryData>,
    /// History trail, oldest first.
    #[serde(default)]
    pub history: Vec<OrderHistoryEntry>,
    /// Assigned manager, if any.
    #[serde(rename = "assignedManager", default)]
    pub assigned_manager: Option<User>,
}

impl Order {
    /// Returns the identifiers of the order's line items.
    #[must_use]
    pub fn product_ids(&self) -> Vec<&str> {
        self.products.iter().map(|product| product.id.as_str()).collect()
    }
}
