// crates/sales-portal-validation/src/validator.rs
// ============================================================================
// Module: Response Validator
// Description: Status, envelope, and schema checks over backend replies.
// Purpose: Report every contract failure of a reply in one error.
// Dependencies: sales-portal-contract, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`ResponseValidator::validate_response`] runs three checks in order and
//! collects their failures:
//! 1. The status equals the expected status.
//! 2. The envelope agrees with the expected status class: below 400 the reply
//!    carries `IsSuccess: true` and no error message; from 400 up it carries
//!    `IsSuccess: false`.
//! 3. The body conforms to the supplied schema (first violation only).
//!
//! The envelope flag is compared strictly: only the JSON boolean `true`
//! satisfies the success class and only `false` satisfies the error class.
//! Truthy or falsy stand-ins such as `1`, `0`, `null`, or `"true"` fail both,
//! unlike a truthiness test, so a backend that drifts from booleans is caught.
//!
//! Registry entries and caller-supplied schemas are both passed as a
//! [`SchemaEntry`]; build the latter with [`SchemaEntry::from_value`].
//!
//! [`validate_json_schema`] fails immediately on the first violation instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::sync::Arc;

use sales_portal_config::AuditConfig;
use sales_portal_contract::SchemaEntry;
use sales_portal_contract::SchemaRegistryError;
use sales_portal_contract::SchemaViolation;
use sales_portal_contract::compile_schema;
use sales_portal_contract::first_violation;
use serde_json::Value;
use thiserror::Error;

use crate::audit::AuditSinkError;
use crate::audit::NoopAuditSink;
use crate::audit::ValidationAuditEvent;
use crate::audit::ValidationAuditParams;
use crate::audit::ValidationAuditSink;
use crate::audit::sink_from_config;
use crate::response::ApiResponse;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// First status code of the error class.
const ERROR_STATUS_MIN: u16 = 400;
/// Rendering of an envelope field missing from the body.
const ABSENT: &str = "<absent>";
/// Name used when compiling caller-supplied schemas.
const INLINE_SCHEMA_NAME: &str = "inline";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Aggregate failure of [`ResponseValidator::validate_response`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Response validation failed:{}", render_failures(.failures))]
pub struct ResponseValidationError {
    /// Failure messages in check order.
    pub failures: Vec<String>,
}

/// Failure of [`validate_json_schema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonSchemaError {
    /// The schema document itself is invalid.
    #[error(transparent)]
    Schema(#[from] SchemaRegistryError),
    /// The body violates the schema.
    #[error(transparent)]
    Violation(#[from] SchemaViolation),
}

/// Renders failures as indented bullet lines.
fn render_failures(failures: &[String]) -> String {
    let mut rendered = String::new();
    for failure in failures {
        let _ = write!(rendered, "\n  - {failure}");
    }
    rendered
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Soft-assertion validator bound to an audit sink.
#[derive(Clone)]
pub struct ResponseValidator {
    /// Destination for validation events.
    audit: Arc<dyn ValidationAuditSink>,
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::new(Arc::new(NoopAuditSink))
    }
}

impl ResponseValidator {
    /// Creates a validator that records to `audit`.
    #[must_use]
    pub fn new(audit: Arc<dyn ValidationAuditSink>) -> Self {
        Self {
            audit,
        }
    }

    /// Creates a validator with the sink selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditSinkError`] when the configured sink cannot be built.
    pub fn from_config(config: &AuditConfig) -> Result<Self, AuditSinkError> {
        Ok(Self::new(sink_from_config(config)?))
    }

    /// Validates status, envelope, and optionally schema of `response`.
    ///
    /// `IsSuccess` must be the literal boolean matching the expected status
    /// class; a missing flag or a non-boolean value is a failure either way.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseValidationError`] listing every failed check.
    pub fn validate_response(
        &self,
        response: &ApiResponse,
        expected_status: u16,
        schema: Option<&SchemaEntry>,
    ) -> Result<(), ResponseValidationError> {
        let failures = collect_failures(response, expected_status, schema);
        self.audit.record(&ValidationAuditEvent::new(ValidationAuditParams {
            expected_status,
            actual_status: response.status,
            schema: schema.map(|entry| entry.label().to_string()),
            failures: failures.clone(),
        }));
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ResponseValidationError {
                failures,
            })
        }
    }
}

/// Validates `response` with a validator that records nothing.
///
/// # Errors
///
/// Returns [`ResponseValidationError`] listing every failed check.
pub fn validate_response(
    response: &ApiResponse,
    expected_status: u16,
    schema: Option<&SchemaEntry>,
) -> Result<(), ResponseValidationError> {
    ResponseValidator::default().validate_response(response, expected_status, schema)
}

/// Validates `body` against an arbitrary draft 2020-12 schema document.
///
/// # Errors
///
/// Returns [`JsonSchemaError::Schema`] when `schema` does not compile and
/// [`JsonSchemaError::Violation`] with the first violation otherwise.
pub fn validate_json_schema(body: &Value, schema: &Value) -> Result<(), JsonSchemaError> {
    let validator = compile_schema(INLINE_SCHEMA_NAME, schema)?;
    match first_violation(&validator, body) {
        Some(violation) => Err(violation.into()),
        None => Ok(()),
    }
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Runs every check and returns failure messages in check order.
fn collect_failures(
    response: &ApiResponse,
    expected_status: u16,
    schema: Option<&SchemaEntry>,
) -> Vec<String> {
    let mut failures = Vec::new();
    if response.status != expected_status {
        failures.push(format!(
            "Expected status {expected_status}, got {}. Body: {}",
            response.status, response.body
        ));
    }
    let is_success = response.is_success();
    if expected_status < ERROR_STATUS_MIN {
        if is_success != Some(&Value::Bool(true)) {
            failures.push(format!("Expected IsSuccess=true, got: {}", render_value(is_success)));
        }
        if let Some(message) = response.error_message().filter(|value| !value.is_null()) {
            let message = message.as_str().map_or_else(|| message.to_string(), str::to_string);
            failures.push(format!(
                "Expected ErrorMessage=null for successful response, got: '{message}'"
            ));
        }
    } else if is_success != Some(&Value::Bool(false)) {
        failures.push(format!(
            "Expected IsSuccess=false on error response, got: {}",
            render_value(is_success)
        ));
    }
    if let Some(entry) = schema
        && let Err(violation) = entry.validate(&response.body)
    {
        failures.push(violation.to_string());
    }
    failures
}

/// Renders an envelope value, or [`ABSENT`] when missing.
fn render_value(value: Option<&Value>) -> String {
    value.map_or_else(|| ABSENT.to_string(), Value::to_string)
}
