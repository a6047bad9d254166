// crates/sales-portal-validation/src/lib.rs
// ============================================================================
// Module: Sales Portal Validation Library
// Description: Soft-assertion response validation with audit logging.
// Purpose: Check status, envelope, and schema of backend replies in one pass.
// Dependencies: sales-portal-contract, sales-portal-config, serde_json
// ============================================================================

//! ## Overview
//! [`ResponseValidator`] runs every check against an [`ApiResponse`] and
//! reports all failures at once in a single [`ResponseValidationError`].
//! [`validate_json_schema`] is the immediate, schema-only counterpart. Each
//! response validation is recorded to a [`ValidationAuditSink`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod response;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSinkError;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::ValidationAuditEvent;
pub use audit::ValidationAuditParams;
pub use audit::ValidationAuditSink;
pub use audit::ValidationOutcome;
pub use audit::sink_from_config;
pub use response::ApiResponse;
pub use validator::JsonSchemaError;
pub use validator::ResponseValidationError;
pub use validator::ResponseValidator;
pub use validator::validate_json_schema;
pub use validator::validate_response;
