// crates/sales-portal-config/src/lib.rs
// ============================================================================
// Module: Sales Portal Config Library
// Description: Canonical config model, validation, and endpoint builders.
// Purpose: Single source of truth for sales-portal.toml semantics.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! `sales-portal-config` defines the configuration model for the test data
//! and validation layer: backend URLs, credentials, manager ids, generator
//! settings, and audit sink selection. Validation is strict and fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod endpoints;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use endpoints::Endpoints;
