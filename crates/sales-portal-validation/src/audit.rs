// crates/sales-portal-validation/src/audit.rs
// ============================================================================
// Module: Validation Audit Logging
// Description: Structured audit events for response validations.
// Purpose: Emit one JSON line per validation without hard dependencies.
// Dependencies: sales-portal-config, serde, serde_json
// ============================================================================

//! ## Overview
//! Every [`crate::ResponseValidator::validate_response`] call produces a
//! [`ValidationAuditEvent`]. Sinks write events as JSON lines; write failures
//! are dropped so logging never changes a validation result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use sales_portal_config::AuditConfig;
use sales_portal_config::AuditSinkKind;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Audit sink construction failures.
#[derive(Debug, Error)]
pub enum AuditSinkError {
    /// The file sink was selected without a path.
    #[error("audit.path is required for the file sink")]
    MissingPath,
    /// The audit log could not be opened.
    #[error("audit log '{path}' cannot be opened: {source}")]
    Open {
        /// Audit log path.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Validation result classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    Failed,
}

/// Response validation audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Status the caller expected.
    pub expected_status: u16,
    /// Status the backend returned.
    pub actual_status: u16,
    /// Schema name when a schema check ran.
    pub schema: Option<String>,
    /// Validation outcome.
    pub outcome: ValidationOutcome,
    /// Number of failed checks.
    pub failure_count: usize,
    /// Failure messages in check order.
    pub failures: Vec<String>,
}

/// Inputs required to construct a validation audit event.
pub struct ValidationAuditParams {
    /// Status the caller expected.
    pub expected_status: u16,
    /// Status the backend returned.
    pub actual_status: u16,
    /// Schema name when a schema check ran.
    pub schema: Option<String>,
    /// Failure messages in check order.
    pub failures: Vec<String>,
}

impl ValidationAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: ValidationAuditParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let outcome = if params.failures.is_empty() {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::Failed
        };
        Self {
            event: "response_validation",
            timestamp_ms,
            expected_status: params.expected_status,
            actual_status: params.actual_status,
            schema: params.schema,
            outcome,
            failure_count: params.failures.len(),
            failures: params.failures,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for validation events.
pub trait ValidationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &ValidationAuditEvent);
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ValidationAuditSink for StderrAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ValidationAuditSink for FileAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ValidationAuditSink for NoopAuditSink {
    fn record(&self, _event: &ValidationAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink selected by `config`.
///
/// # Errors
///
/// Returns [`AuditSinkError`] when the file sink has no path or cannot be opened.
pub fn sink_from_config(config: &AuditConfig) -> Result<Arc<dyn ValidationAuditSink>, AuditSinkError> {
    match config.sink {
        AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
        AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
        AuditSinkKind::File => {
            let path = config.path.as_deref().ok_or(AuditSinkError::MissingPath)?;
            let sink = FileAuditSink::new(Path::new(path)).map_err(|source| AuditSinkError::Open {
                path: path.to_string(),
                source,
            })?;
            Ok(Arc::new(sink))
        }
    }
}
