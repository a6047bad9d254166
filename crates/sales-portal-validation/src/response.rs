// crates/sales-portal-validation/src/response.rs
// ============================================================================
// Module: API Response
// Description: Transport-neutral view of one backend reply.
// Purpose: Decouple validation from the HTTP client that produced the reply.
// Dependencies: serde_json, sales-portal-contract
// ============================================================================

//! ## Overview
//! The HTTP transport lives outside this workspace; it hands replies over as
//! [`ApiResponse`] values. Non-JSON bodies are represented by
//! [`Value::Null`] with the raw text preserved.

use std::collections::BTreeMap;

use sales_portal_contract::schemas::ERROR_MESSAGE_FIELD;
use sales_portal_contract::schemas::IS_SUCCESS_FIELD;
use serde_json::Value;

/// One backend reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body.
    pub body: Value,
    /// Raw body text.
    pub text: String,
    /// Response headers keyed by lowercase name.
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    /// Builds a response from a parsed body; `text` is the body's JSON text.
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        let text = body.to_string();
        Self {
            status,
            body,
            text,
            headers: BTreeMap::new(),
        }
    }

    /// Builds a response from raw body text, parsing it when it is JSON.
    #[must_use]
    pub fn from_text(status: u16, text: impl Into<String>) -> Self {
        let text = text.into();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            body,
            text,
            headers: BTreeMap::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Returns a header value, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns the `IsSuccess` envelope value, when present.
    #[must_use]
    pub fn is_success(&self) -> Option<&Value> {
        self.body.get(IS_SUCCESS_FIELD)
    }

    /// Returns the `ErrorMessage` envelope value, when present.
    #[must_use]
    pub fn error_message(&self) -> Option<&Value> {
        self.body.get(ERROR_MESSAGE_FIELD)
    }
}
