// crates/sales-portal-contract/tests/registry.rs
// ============================================================================
// Module: Schema Registry Tests
// Description: Compiles every named schema and validates sample bodies.
// Purpose: Ensure the registry accepts backend-shaped replies and rejects drift.
// Dependencies: sales-portal-contract, serde_json
// ============================================================================

//! Schema registry integration tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use sales_portal_contract::SchemaEntry;
use sales_portal_contract::SchemaName;
use sales_portal_contract::SchemaRegistryError;
use sales_portal_contract::registry;
use sales_portal_contract::schema;
use serde_json::Value;
use serde_json::json;

fn customer() -> Value {
    json!({
        "_id": "c1",
        "email": "a@b.io",
        "name": "Ann",
        "country": "USA",
        "city": "Austin",
        "street": "Main 1",
        "house": 1,
        "flat": 2,
        "phone": "+12345678901234",
        "createdOn": "2026-01-01T00:00:00.000Z"
    })
}

fn user() -> Value {
    json!({
        "_id": "u1",
        "username": "admin@example.com",
        "firstName": "Ada",
        "lastName": "Admin",
        "roles": ["ADMIN"],
        "createdOn": "2026-01-01T00:00:00.000Z"
    })
}

fn order() -> Value {
    json!({
        "_id": "o1",
        "status": "Draft",
        "customer": customer(),
        "products": [{
            "_id": "p1",
            "name": "Product Abcd1234",
            "amount": 2,
            "price": 10,
            "manufacturer": "Apple",
            "notes": "",
            "received": false
        }],
        "delivery": null,
        "total_price": 10,
        "createdOn": "2026-01-01T00:00:00.000Z",
        "comments": [],
        "history": [],
        "assignedManager": null
    })
}

#[test]
fn every_named_schema_compiles_once() {
    let first = registry().unwrap();
    let second = registry().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.entries().count(), SchemaName::all().len());
    for name in SchemaName::all() {
        let entry = first.get(*name).unwrap();
        assert_eq!(entry.name(), Some(*name));
        assert_eq!(entry.label(), name.as_str());
        assert_eq!(name.as_str().parse::<SchemaName>().unwrap(), *name);
    }
}

#[test]
fn unknown_key_is_rejected() {
    let err = registry().unwrap().get_by_key("get_products_list").unwrap_err();
    assert_eq!(err, SchemaRegistryError::Unknown("get_products_list".to_string()));
    assert!(registry().unwrap().get_by_key("get_order").is_ok());
}

#[test]
fn login_reply_passes_envelope_schema() {
    let entry = schema(SchemaName::Login).unwrap();
    assert!(entry.validate(&json!({ "IsSuccess": true, "ErrorMessage": null })).is_ok());
    assert!(entry.validate(&json!({ "IsSuccess": false, "ErrorMessage": "Not authorized" })).is_ok());
    assert!(!entry.is_valid(&json!({ "IsSuccess": "yes", "ErrorMessage": null })));
}

#[test]
fn customer_reply_passes_and_unknown_country_fails() {
    let entry = schema(SchemaName::CreateCustomer).unwrap();
    let body = json!({ "Customer": customer(), "IsSuccess": true, "ErrorMessage": null });
    assert!(entry.validate(&body).is_ok());

    let mut bad = body;
    bad["Customer"]["country"] = json!("Atlantis");
    let violation = entry.validate(&bad).unwrap_err();
    assert!(violation.message.contains("Atlantis"), "{}", violation.message);
    assert!(violation.to_string().starts_with("JSON schema validation failed: "));
}

#[test]
fn order_reply_is_closed_and_nested() {
    let entry = schema(SchemaName::GetOrder).unwrap();
    let body = json!({ "Order": order(), "IsSuccess": true, "ErrorMessage": null });
    assert!(entry.validate(&body).is_ok());

    let mut extra = body.clone();
    extra["unexpected"] = json!(1);
    assert!(entry.validate(&extra).is_err());

    let mut managed = body;
    managed["Order"]["assignedManager"] = user();
    assert!(entry.validate(&managed).is_ok());
    managed["Order"]["assignedManager"]["roles"] = json!(["ROOT"]);
    assert!(entry.validate(&managed).is_err());
}

#[test]
fn orders_list_requires_paging_and_sorting() {
    let entry = schema(SchemaName::GetOrdersList).unwrap();
    let body = json!({
        "orders": [order()],
        "total": 1,
        "page": 1,
        "limit": 10,
        "search": "",
        "status": ["Draft", "In Process"],
        "sorting": { "sortField": "createdOn", "sortOrder": "desc" },
        "IsSuccess": true,
        "ErrorMessage": null
    });
    assert!(entry.validate(&body).is_ok());

    let mut unsorted = body;
    unsorted["sorting"]["sortField"] = json!("weight");
    assert!(entry.validate(&unsorted).is_err());
}

#[test]
fn validate_reports_first_and_violations_reports_all() {
    let entry = schema(SchemaName::GetUser).unwrap();
    let body = json!({ "User": { "_id": 7 }, "IsSuccess": "no" });
    assert!(entry.validate(&body).is_err());
    assert!(entry.violations(&body).len() > 1);
    let valid = json!({ "User": user(), "IsSuccess": true, "ErrorMessage": null });
    assert!(entry.violations(&valid).is_empty());
}

#[test]
fn inline_schema_compiles_under_its_label() {
    let schema = json!({ "type": "object", "required": ["email"] });
    let entry = SchemaEntry::from_value("customer_fragment", &schema).unwrap();
    assert_eq!(entry.name(), None);
    assert_eq!(entry.label(), "customer_fragment");
    assert_eq!(entry.schema(), &schema);
    assert!(entry.is_valid(&json!({ "email": "a@b.cd" })));
    assert!(entry.validate(&json!({})).is_err());

    let err = SchemaEntry::from_value("broken", &json!({ "type": 7 })).unwrap_err();
    assert!(matches!(err, SchemaRegistryError::Compile { ref name, .. } if name == "broken"));
}
