// crates/sales-portal-contract/src/lib.rs
// ============================================================================
// Module: Sales Portal Contract Library
// Description: Response schema builders and the compiled schema registry.
// Purpose: Single source of truth for backend response shapes.
// Dependencies: sales-portal-core, jsonschema, serde_json
// ============================================================================

//! ## Overview
//! `sales-portal-contract` encodes the backend's observable response contract
//! as JSON Schema documents and exposes them, compiled, through a registry
//! addressable by [`SchemaName`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod registry;
pub mod schemas;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use registry::SchemaEntry;
pub use registry::SchemaName;
pub use registry::SchemaRegistry;
pub use registry::SchemaRegistryError;
pub use registry::SchemaViolation;
pub use registry::compile_schema;
pub use registry::first_violation;
pub use registry::registry;
pub use registry::schema;
