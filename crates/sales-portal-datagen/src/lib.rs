// crates/sales-portal-datagen/src/lib.rs
// ============================================================================
// Module: Sales Portal Data Generator Library
// Description: Constrained random payloads for API test setup.
// Purpose: Expose generators, overrides, and text shaping helpers.
// Dependencies: crate::{generator, overrides, text, unique}
// ============================================================================

//! ## Overview
//! `sales-portal-datagen` builds customer, product, delivery, and order
//! payloads whose every generated field passes the backend's validation
//! rules. Tests pin individual fields through override structs; pinned values
//! reach the backend untouched so negative cases can be expressed directly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod generator;
pub mod overrides;
pub mod text;
pub mod unique;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use generator::DataGenerator;
pub use generator::PRODUCT_NAME_PREFIX;
pub use generator::generate_customer_data;
pub use generator::generate_delivery_data;
pub use generator::generate_order_data;
pub use generator::generate_product_data;
pub use overrides::CustomerOverrides;
pub use overrides::DeliveryOverrides;
pub use overrides::ProductOverrides;
