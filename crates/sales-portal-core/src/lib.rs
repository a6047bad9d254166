// crates/sales-portal-core/src/lib.rs
// ============================================================================
// Module: Sales Portal Core Library
// Description: Domain vocabulary shared by generators, schemas, and validators.
// Purpose: Expose value sets, entity models, field rules, and date helpers.
// Dependencies: crate::{enums, models, constraints, messages, dates, store}
// ============================================================================

//! ## Overview
//! Sales Portal core holds the domain model of the sales-order-management
//! backend as seen by API tests: closed value sets, payload and record shapes,
//! the backend's per-field rules and messages, `YYYY/MM/DD` date handling, and
//! a store of created entity ids for cleanup. It performs no I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod constraints;
pub mod dates;
pub mod enums;
pub mod messages;
pub mod models;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use constraints::FieldViolation;
pub use constraints::check_customer;
pub use constraints::check_delivery;
pub use constraints::check_product;
pub use dates::DateFormatError;
pub use enums::Country;
pub use enums::CustomerSortField;
pub use enums::DeliveryCondition;
pub use enums::DeliveryLocation;
pub use enums::Manufacturer;
pub use enums::NotificationType;
pub use enums::OrderHistoryAction;
pub use enums::OrderSortField;
pub use enums::OrderStatus;
pub use enums::SortOrder;
pub use enums::UnknownValue;
pub use enums::UserRole;
pub use enums::ValueSet;
pub use models::*;
pub use store::EntityStore;
pub use store::EntityStoreError;
