// crates/sales-portal-datagen/src/overrides.rs
// ============================================================================
// Module: Generator Overrides
// Description: Optional per-field values that replace generated ones.
// Purpose: Let tests pin fields, including deliberately invalid values.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Every field left as `None` is generated; every `Some` value is copied into
//! the payload verbatim, without validation or clamping.

/// Overrides for [`crate::DataGenerator::customer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerOverrides {
    /// Email.
    pub email: Option<String>,
    /// Full name.
    pub name: Option<String>,
    /// Country wire value.
    pub country: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street.
    pub street: Option<String>,
    /// House number.
    pub house: Option<i64>,
    /// Flat number.
    pub flat: Option<i64>,
    /// Phone.
    pub phone: Option<String>,
    /// Notes; never generated.
    pub notes: Option<String>,
}

/// Overrides for [`crate::DataGenerator::product`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductOverrides {
    /// Product name.
    pub name: Option<String>,
    /// Amount.
    pub amount: Option<i64>,
    /// Price.
    pub price: Option<i64>,
    /// Manufacturer wire value.
    pub manufacturer: Option<String>,
    /// Notes; never generated.
    pub notes: Option<String>,
}

/// Overrides for [`crate::DataGenerator::delivery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryOverrides {
    /// Country wire value.
    pub country: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street.
    pub street: Option<String>,
    /// House number.
    pub house: Option<i64>,
    /// Flat number.
    pub flat: Option<i64>,
    /// Delivery condition wire value.
    pub condition: Option<String>,
    /// Final date, expected as `YYYY/MM/DD` but not checked.
    pub final_date: Option<String>,
    /// Day offset from today used when `final_date` is unset.
    pub days_offset: Option<i64>,
}
