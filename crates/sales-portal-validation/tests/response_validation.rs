// crates/sales-portal-validation/tests/response_validation.rs
// ============================================================================
// Module: Response Validation Tests
// Description: Envelope, status, and schema checks with aggregate reporting.
// Purpose: Ensure every failed check surfaces in one error, in check order.
// Dependencies: sales-portal-validation, sales-portal-contract, serde_json
// ============================================================================

//! Response validation integration tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use sales_portal_contract::SchemaEntry;
use sales_portal_contract::SchemaName;
use sales_portal_contract::schema;
use sales_portal_validation::ApiResponse;
use sales_portal_validation::JsonSchemaError;
use sales_portal_validation::ResponseValidationError;
use sales_portal_validation::validate_json_schema;
use sales_portal_validation::validate_response;
use serde_json::Value;
use serde_json::json;

fn entry(name: SchemaName) -> &'static SchemaEntry {
    schema(name).expect("registered schema")
}

fn failures(result: Result<(), ResponseValidationError>) -> Vec<String> {
    result.expect_err("validation should fail").failures
}

fn product_body() -> Value {
    json!({
        "Product": {
            "_id": "64b7f0c2e1d3a4b5c6d7e8f9",
            "name": "Product AbCd1234",
            "amount": 5,
            "price": 100,
            "manufacturer": "Apple",
            "createdOn": "2026-01-01T00:00:00.000Z"
        },
        "IsSuccess": true,
        "ErrorMessage": null
    })
}

// ============================================================================
// SECTION: Success Path
// ============================================================================

#[test]
fn success_envelope_with_matching_status_passes() {
    let response = ApiResponse::new(200, json!({ "IsSuccess": true, "ErrorMessage": null }));
    assert!(validate_response(&response, 200, None).is_ok());
    assert!(validate_response(&response, 200, Some(entry(SchemaName::Login))).is_ok());
}

#[test]
fn absent_error_message_is_accepted_without_schema() {
    let response = ApiResponse::new(201, json!({ "IsSuccess": true }));
    assert!(validate_response(&response, 201, None).is_ok());
}

#[test]
fn entity_reply_passes_its_schema() {
    let response = ApiResponse::new(200, product_body());
    assert!(validate_response(&response, 200, Some(entry(SchemaName::GetProduct))).is_ok());
}

#[test]
fn error_envelope_with_expected_error_status_passes() {
    let response = ApiResponse::new(
        400,
        json!({ "IsSuccess": false, "ErrorMessage": "Incorrect request body" }),
    );
    assert!(validate_response(&response, 400, None).is_ok());
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

#[test]
fn status_and_envelope_failures_are_aggregated() {
    let body = json!({ "IsSuccess": false, "ErrorMessage": "Not authorized" });
    let response = ApiResponse::new(401, body.clone());
    let failures = failures(validate_response(&response, 200, None));
    assert_eq!(
        failures,
        vec![
            format!("Expected status 200, got 401. Body: {body}"),
            "Expected IsSuccess=true, got: false".to_string(),
            "Expected ErrorMessage=null for successful response, got: 'Not authorized'"
                .to_string(),
        ]
    );
}

#[test]
fn aggregate_message_lists_each_failure_on_its_own_line() {
    let response = ApiResponse::new(500, json!({ "IsSuccess": true }));
    let err = validate_response(&response, 404, None).expect_err("should fail");
    assert_eq!(
        err.to_string(),
        "Response validation failed:\n  - Expected status 404, got 500. Body: {\"IsSuccess\":true}\n  \
         - Expected IsSuccess=false on error response, got: true"
    );
}

#[test]
fn missing_envelope_fields_render_as_absent() {
    let response = ApiResponse::new(200, json!({}));
    assert_eq!(
        failures(validate_response(&response, 200, None)),
        vec!["Expected IsSuccess=true, got: <absent>".to_string()]
    );
    let response = ApiResponse::new(404, json!({}));
    assert_eq!(
        failures(validate_response(&response, 404, None)),
        vec!["Expected IsSuccess=false on error response, got: <absent>".to_string()]
    );
}

#[test]
fn non_boolean_success_flag_fails_both_ways() {
    let response = ApiResponse::new(200, json!({ "IsSuccess": "true" }));
    assert_eq!(
        failures(validate_response(&response, 200, None)),
        vec!["Expected IsSuccess=true, got: \"true\"".to_string()]
    );
    let response = ApiResponse::new(400, json!({ "IsSuccess": 0 }));
    assert_eq!(failures(validate_response(&response, 400, None)).len(), 1);
}

#[test]
fn non_json_body_fails_envelope_checks() {
    let response = ApiResponse::from_text(502, "<html>Bad Gateway</html>");
    assert_eq!(response.body, Value::Null);
    assert_eq!(response.text, "<html>Bad Gateway</html>");
    let failures = failures(validate_response(&response, 200, None));
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0], "Expected status 200, got 502. Body: null");
}

// ============================================================================
// SECTION: Schema Checks
// ============================================================================

#[test]
fn schema_violation_is_appended_after_envelope_checks() {
    let mut body = product_body();
    body["Product"]["price"] = json!("free");
    body["IsSuccess"] = json!(false);
    let response = ApiResponse::new(200, body);
    let failures = failures(validate_response(&response, 200, Some(entry(SchemaName::GetProduct))));
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0], "Expected IsSuccess=true, got: false");
    assert!(failures[1].starts_with("JSON schema validation failed: "), "{}", failures[1]);
}

#[test]
fn only_the_first_schema_violation_is_reported() {
    let response = ApiResponse::new(
        200,
        json!({ "Product": { "extra": 1 }, "IsSuccess": true, "ErrorMessage": null }),
    );
    let entry = entry(SchemaName::GetProduct);
    assert!(entry.violations(&response.body).len() > 1);
    assert_eq!(failures(validate_response(&response, 200, Some(entry))).len(), 1);
}

#[test]
fn schema_only_validation_fails_immediately() {
    let schema = json!({
        "type": "object",
        "properties": { "total": { "type": "integer" } },
        "required": ["total"]
    });
    assert!(validate_json_schema(&json!({ "total": 3 }), &schema).is_ok());
    match validate_json_schema(&json!({ "total": "3" }), &schema) {
        Err(JsonSchemaError::Violation(violation)) => {
            assert!(
                violation.to_string().starts_with("JSON schema validation failed: "),
                "{violation}"
            );
        }
        other => panic!("expected violation, got {}", other.is_ok()),
    }
}

#[test]
fn invalid_schema_document_is_a_schema_error() {
    let schema = json!({ "type": "no-such-type" });
    assert!(matches!(
        validate_json_schema(&json!({}), &schema),
        Err(JsonSchemaError::Schema(_))
    ));
}

#[test]
fn registry_entry_validate_matches_schema_only_path() {
    let entry = entry(SchemaName::GetProduct);
    assert!(entry.validate(&product_body()).is_ok());
    assert!(validate_json_schema(&product_body(), entry.schema()).is_ok());
    let body = json!({ "IsSuccess": true, "ErrorMessage": null });
    assert_eq!(
        entry.validate(&body).map_err(|violation| violation.to_string()),
        validate_json_schema(&body, entry.schema()).map_err(|err| err.to_string())
    );
}

#[test]
fn inline_schema_yields_same_violation_on_both_paths() {
    let schema = json!({
        "type": "object",
        "properties": {
            "_id": { "type": "string" },
            "email": { "type": "string" },
            "name": { "type": "string" }
        },
        "required": ["_id", "email", "name"]
    });
    let body = json!({ "_id": "64b7f0c2e1d3a4b5c6d7e8f9", "name": "Jane Doe", "IsSuccess": true });

    let immediate = validate_json_schema(&body, &schema).expect_err("missing email");
    let immediate = immediate.to_string();
    assert!(immediate.starts_with("JSON schema validation failed: "), "{immediate}");
    assert!(immediate.contains("email"), "{immediate}");

    let entry = SchemaEntry::from_value("customer_inline", &schema).expect("schema compiles");
    let response = ApiResponse::new(200, body);
    let failures = failures(validate_response(&response, 200, Some(&entry)));
    assert_eq!(failures, vec![immediate]);
}

#[test]
fn inline_schema_failure_joins_status_and_envelope_failures() {
    let schema = json!({ "type": "object", "required": ["email"] });
    let entry = SchemaEntry::from_value("email_required", &schema).expect("schema compiles");
    let response = ApiResponse::new(500, json!({ "IsSuccess": false }));
    let err = validate_response(&response, 201, Some(&entry)).expect_err("should fail");
    assert_eq!(err.failures.len(), 3);
    assert!(err.failures[2].contains("email"), "{}", err.failures[2]);
    assert!(err.to_string().starts_with("Response validation failed:\n  - Expected status 201"));
}

// ============================================================================
// SECTION: Response Accessors
// ============================================================================

#[test]
fn headers_match_case_insensitively() {
    let response = ApiResponse::new(200, json!({}))
        .with_header("Authorization", "Bearer token")
        .with_header("content-type", "application/json");
    assert_eq!(response.header("authorization"), Some("Bearer token"));
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.header("x-missing"), None);
}
