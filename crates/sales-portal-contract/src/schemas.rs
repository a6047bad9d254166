// crates/sales-portal-contract/src/schemas.rs
// ============================================================================
// Module: Response Schemas
// Description: JSON schema builders for every backend response shape.
// Purpose: Encode the backend's observable response contract in one place.
// Dependencies: sales-portal-core, serde_json
// ============================================================================

//! ## Overview
//! Entity schemas (customer, product, order, ...) are composed into response
//! schemas by embedding them under a named key next to the `IsSuccess` and
//! `ErrorMessage` envelope fields. Every enum restriction is taken from the
//! core value sets so schemas and generators share one vocabulary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sales_portal_core::Country;
use sales_portal_core::CustomerSortField;
use sales_portal_core::DeliveryCondition;
use sales_portal_core::Manufacturer;
use sales_portal_core::NotificationType;
use sales_portal_core::OrderHistoryAction;
use sales_portal_core::OrderSortField;
use sales_portal_core::OrderStatus;
use sales_portal_core::SortOrder;
use sales_portal_core::UserRole;
use sales_portal_core::ValueSet;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Envelope success flag field.
pub const IS_SUCCESS_FIELD: &str = "IsSuccess";
/// Envelope error message field.
pub const ERROR_MESSAGE_FIELD: &str = "ErrorMessage";

/// Returns the envelope property definitions present on every response.
#[must_use]
pub fn envelope_properties() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(IS_SUCCESS_FIELD.to_string(), json!({ "type": "boolean" }));
    properties.insert(ERROR_MESSAGE_FIELD.to_string(), json!({ "type": ["string", "null"] }));
    properties
}

/// Wraps `properties` with the envelope fields and required list.
fn enveloped(mut properties: Map<String, Value>, required: &[&str], closed: bool) -> Value {
    properties.extend(envelope_properties());
    let mut required: Vec<&str> = required.to_vec();
    required.extend([IS_SUCCESS_FIELD, ERROR_MESSAGE_FIELD]);
    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "required": required,
    });
    if closed && let Value::Object(map) = &mut schema {
        map.insert("additionalProperties".to_string(), Value::Bool(false));
    }
    schema
}

/// Envelope around one entity under `key`.
fn single(key: &str, entity: Value, closed: bool) -> Value {
    let mut properties = Map::new();
    properties.insert(key.to_string(), entity);
    enveloped(properties, &[key], closed)
}

/// Envelope around an array of entities under `key`.
fn listing(key: &str, entity: Value, closed: bool) -> Value {
    single(key, array_of(entity), closed)
}

/// Array schema with the given item schema.
fn array_of(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// String schema restricted to the members of a value set.
fn enum_of<T: ValueSet>() -> Value {
    json!({ "type": "string", "enum": T::wire_values() })
}

/// Schema allowing `schema` or `null`.
fn nullable(schema: Value) -> Value {
    json!({ "anyOf": [schema, { "type": "null" }] })
}

// ============================================================================
// SECTION: Entity Schemas
// ============================================================================

/// Returns the customer record schema.
#[must_use]
pub fn customer_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "email": { "type": "string" },
            "name": { "type": "string" },
            "country": enum_of::<Country>(),
            "city": { "type": "string" },
            "street": { "type": "string" },
            "house": { "type": "number" },
            "flat": { "type": "number" },
            "phone": { "type": "string" },
            "createdOn": { "type": "string" },
            "notes": { "type": "string" }
        },
        "required": [
            "_id", "email", "name", "country", "city", "street", "house", "flat", "phone",
            "createdOn"
        ]
    })
}

/// Returns the product record schema.
#[must_use]
pub fn product_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "name": { "type": "string" },
            "amount": { "type": "number" },
            "price": { "type": "number" },
            "createdOn": { "type": "string" },
            "notes": { "type": "string" },
            "manufacturer": enum_of::<Manufacturer>()
        },
        "required": ["_id", "name", "amount", "price", "manufacturer", "createdOn"],
        "additionalProperties": false
    })
}

/// Returns the order line item schema.
#[must_use]
pub fn order_product_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "name": { "type": "string" },
            "amount": { "type": "number" },
            "price": { "type": "number" },
            "manufacturer": { "type": "string" },
            "notes": { "type": "string" },
            "received": { "type": "boolean" }
        },
        "required": ["_id", "name", "amount", "price", "manufacturer", "notes", "received"],
        "additionalProperties": false
    })
}

/// Returns the order comment schema.
#[must_use]
pub fn comment_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "text": { "type": "string" },
            "createdOn": { "type": "string" }
        },
        "required": ["_id", "text", "createdOn"],
        "additionalProperties": false
    })
}

/// Returns the user schema with role restrictions.
#[must_use]
pub fn user_schema() -> Value {
    user_shaped(enum_of::<UserRole>())
}

/// Returns the history performer schema; roles are unrestricted strings.
#[must_use]
pub fn performer_schema() -> Value {
    user_shaped(json!({ "type": "string" }))
}

/// User-shaped object with the given role item schema.
fn user_shaped(role: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "username": { "type": "string" },
            "firstName": { "type": "string" },
            "lastName": { "type": "string" },
            "roles": array_of(role),
            "createdOn": { "type": "string" }
        },
        "required": ["_id", "username", "firstName", "lastName", "roles", "createdOn"],
        "additionalProperties": false
    })
}

/// Returns the delivery address schema.
#[must_use]
pub fn delivery_address_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "country": { "type": "string" },
            "city": { "type": "string" },
            "street": { "type": "string" },
            "house": { "type": "number" },
            "flat": { "type": "number" }
        },
        "required": ["country", "city", "street", "house", "flat"],
        "additionalProperties": false
    })
}

/// Returns the delivery info schema.
#[must_use]
pub fn delivery_info_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "address": delivery_address_schema(),
            "finalDate": { "type": "string" },
            "condition": enum_of::<DeliveryCondition>()
        },
        "required": ["address", "condition", "finalDate"],
        "additionalProperties": false
    })
}

/// Returns the order history entry schema.
#[must_use]
pub fn order_history_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "status": enum_of::<OrderStatus>(),
            "customer": { "type": "string" },
            "products": array_of(order_product_schema()),
            "total_price": { "type": "number" },
            "delivery": nullable(delivery_info_schema()),
            "assignedManager": nullable(user_schema()),
            "changedOn": { "type": "string" },
            "action": enum_of::<OrderHistoryAction>(),
            "performer": performer_schema()
        },
        "required": [
            "status", "customer", "products", "total_price", "delivery", "assignedManager",
            "changedOn", "action", "performer"
        ],
        "additionalProperties": false
    })
}

/// Returns the order record schema.
#[must_use]
pub fn order_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "status": enum_of::<OrderStatus>(),
            "customer": customer_schema(),
            "products": array_of(order_product_schema()),
            "delivery": nullable(delivery_info_schema()),
            "total_price": { "type": "number" },
            "createdOn": { "type": "string" },
            "comments": array_of(comment_schema()),
            "history": array_of(order_history_schema()),
            "assignedManager": nullable(user_schema())
        },
        "required": [
            "_id", "status", "customer", "products", "total_price", "createdOn", "comments",
            "history", "assignedManager", "delivery"
        ],
        "additionalProperties": false
    })
}

/// Returns the notification schema.
#[must_use]
pub fn notification_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "userId": { "type": "string" },
            "type": enum_of::<NotificationType>(),
            "orderId": { "type": "string" },
            "message": { "type": "string" },
            "read": { "type": "boolean" },
            "createdAt": { "type": "string" },
            "expiresAt": { "type": "string" },
            "updatedAt": { "type": "string" }
        },
        "required": [
            "_id", "userId", "type", "orderId", "message", "read", "createdAt", "expiresAt",
            "updatedAt"
        ]
    })
}

/// Returns the sorting object schema for order listings.
#[must_use]
pub fn orders_sorting_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "sortField": enum_of::<OrderSortField>(),
            "sortOrder": enum_of::<SortOrder>()
        },
        "required": ["sortField", "sortOrder"],
        "additionalProperties": false
    })
}

/// Returns the sorting object schema for customer listings.
#[must_use]
pub fn customers_sorting_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "sortField": enum_of::<CustomerSortField>(),
            "sortOrder": enum_of::<SortOrder>()
        }
    })
}

// ============================================================================
// SECTION: Response Schemas
// ============================================================================

/// Returns the envelope-only schema used by login and delete replies.
#[must_use]
pub fn envelope_schema() -> Value {
    enveloped(Map::new(), &[], false)
}

/// Returns the single-customer response schema.
#[must_use]
pub fn customer_response_schema() -> Value {
    single("Customer", customer_schema(), false)
}

/// Returns the all-customers response schema.
#[must_use]
pub fn customers_response_schema() -> Value {
    listing("Customers", customer_schema(), false)
}

/// Returns the paged customer list response schema.
#[must_use]
pub fn customers_list_schema() -> Value {
    let mut properties = Map::new();
    properties.insert("Customers".to_string(), array_of(customer_schema()));
    properties.insert("total".to_string(), json!({ "type": "number" }));
    properties.insert("page".to_string(), json!({ "type": "number" }));
    properties.insert("limit".to_string(), json!({ "type": "number" }));
    properties.insert("search".to_string(), json!({ "type": "string" }));
    properties.insert("country".to_string(), array_of(enum_of::<Country>()));
    properties.insert("sorting".to_string(), customers_sorting_schema());
    enveloped(properties, &["Customers"], false)
}

/// Returns the single-product response schema.
#[must_use]
pub fn product_response_schema() -> Value {
    single("Product", product_schema(), false)
}

/// Returns the all-products response schema.
#[must_use]
pub fn products_response_schema() -> Value {
    listing("Products", product_schema(), false)
}

/// Returns the single-order response schema.
#[must_use]
pub fn order_response_schema() -> Value {
    single("Order", order_schema(), true)
}

/// Returns the all-orders response schema.
#[must_use]
pub fn orders_response_schema() -> Value {
    listing("Orders", order_schema(), false)
}

/// Returns the paged order list response schema.
#[must_use]
pub fn orders_list_schema() -> Value {
    let mut properties = Map::new();
    properties.insert("orders".to_string(), array_of(order_schema()));
    properties.insert("total".to_string(), json!({ "type": "number" }));
    properties.insert("page".to_string(), json!({ "type": "number" }));
    properties.insert("limit".to_string(), json!({ "type": "number" }));
    properties.insert("search".to_string(), json!({ "type": "string" }));
    properties.insert("status".to_string(), array_of(enum_of::<OrderStatus>()));
    properties.insert("sorting".to_string(), orders_sorting_schema());
    enveloped(
        properties,
        &["orders", "total", "page", "limit", "search", "status", "sorting"],
        true,
    )
}

/// Returns the single-user response schema.
#[must_use]
pub fn user_response_schema() -> Value {
    single("User", user_schema(), true)
}

/// Returns the all-users response schema.
#[must_use]
pub fn users_response_schema() -> Value {
    listing("Users", user_schema(), true)
}

/// Returns the notifications response schema.
#[must_use]
pub fn notifications_response_schema() -> Value {
    listing("Notifications", notification_schema(), false)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
