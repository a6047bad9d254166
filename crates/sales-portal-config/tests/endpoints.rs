//! Endpoint URL builder tests for sales-portal-config.
// crates/sales-portal-config/tests/endpoints.rs
// =============================================================================
// Module: Endpoint Tests
// Description: Validate route rendering from the configured base URL.
// Purpose: Ensure every backend route keeps its exact path.
// =============================================================================

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::use_debug,
    reason = "Test-only helpers render config values in failure messages."
)]

use sales_portal_config::Endpoints;
use sales_portal_config::SalesPortalConfig;

type TestResult = Result<(), String>;

fn expect_eq(actual: &str, expected: &str) -> TestResult {
    if actual == expected { Ok(()) } else { Err(format!("expected {expected}, got {actual}")) }
}

#[test]
fn static_routes_hang_off_api_prefix() -> TestResult {
    let endpoints = SalesPortalConfig::default().endpoints().map_err(|err| err.to_string())?;
    expect_eq(&endpoints.login(), "http://localhost:8686/api/login")?;
    expect_eq(&endpoints.logout(), "http://localhost:8686/api/logout")?;
    expect_eq(&endpoints.products_all(), "http://localhost:8686/api/products/all")?;
    expect_eq(&endpoints.customers_all(), "http://localhost:8686/api/customers/all")?;
    expect_eq(&endpoints.orders(), "http://localhost:8686/api/orders")?;
    expect_eq(
        &endpoints.notifications_mark_all_read(),
        "http://localhost:8686/api/notifications/mark-all-read",
    )?;
    expect_eq(&endpoints.metrics(), "http://localhost:8686/api/metrics")?;
    expect_eq(&endpoints.users(), "http://localhost:8686/api/users")
}

#[test]
fn id_routes_embed_identifiers() -> TestResult {
    let endpoints = Endpoints::new("https://api.example.test/").map_err(|err| err.to_string())?;
    expect_eq(endpoints.base_url(), "https://api.example.test")?;
    expect_eq(&endpoints.product_by_id("p1"), "https://api.example.test/api/products/p1")?;
    expect_eq(&endpoints.customer_by_id("c1"), "https://api.example.test/api/customers/c1")?;
    expect_eq(
        &endpoints.customer_orders("c1"),
        "https://api.example.test/api/customers/c1/orders",
    )?;
    expect_eq(&endpoints.order_by_id("o1"), "https://api.example.test/api/orders/o1")?;
    expect_eq(&endpoints.order_delivery("o1"), "https://api.example.test/api/orders/o1/delivery")?;
    expect_eq(&endpoints.order_status("o1"), "https://api.example.test/api/orders/o1/status")?;
    expect_eq(&endpoints.order_receive("o1"), "https://api.example.test/api/orders/o1/receive")?;
    expect_eq(&endpoints.order_comments("o1"), "https://api.example.test/api/orders/o1/comments")?;
    expect_eq(
        &endpoints.order_comment_by_id("o1", "m1"),
        "https://api.example.test/api/orders/o1/comments/m1",
    )?;
    expect_eq(
        &endpoints.assign_manager("o1", "u1"),
        "https://api.example.test/api/orders/o1/assign-manager/u1",
    )?;
    expect_eq(
        &endpoints.unassign_manager("o1"),
        "https://api.example.test/api/orders/o1/unassign-manager",
    )?;
    expect_eq(
        &endpoints.notification_read("n1"),
        "https://api.example.test/api/notifications/n1/read",
    )?;
    expect_eq(&endpoints.user_by_id("u1"), "https://api.example.test/api/users/u1")?;
    expect_eq(&endpoints.user_password("u1"), "https://api.example.test/api/users/password/u1")
}

#[test]
fn invalid_base_url_is_rejected() -> TestResult {
    match Endpoints::new("localhost:8686") {
        Err(_) => Ok(()),
        Ok(endpoints) => Err(format!("accepted {}", endpoints.base_url())),
    }
}
