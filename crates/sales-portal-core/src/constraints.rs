// crates/sales-portal-core/src/constraints.rs
// ============================================================================
// Module: Backend Field Constraints
// Description: Per-field rules the backend enforces on entity payloads.
// Purpose: Give generators and tests one executable statement of the rules.
// Dependencies: crate::{enums, messages, models, dates}
// ============================================================================

//! ## Overview
//! Each check walks a payload and reports every violated field together with
//! the exact message the backend would answer with. Generated payloads must
//! always produce an empty report; tests that send invalid overrides can use
//! the report to predict the backend's `ErrorMessage`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::ops::RangeInclusive;

use crate::dates::parse_api_date;
use crate::enums::Country;
use crate::enums::DeliveryCondition;
use crate::enums::Manufacturer;
use crate::enums::ValueSet;
use crate::messages::response;
use crate::messages::validation;
use crate::models::CustomerData;
use crate::models::DeliveryAddress;
use crate::models::DeliveryData;
use crate::models::ProductData;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum customer name length.
pub const CUSTOMER_NAME_MAX: usize = 40;
/// Maximum city length.
pub const CITY_MAX: usize = 20;
/// Maximum street length.
pub const STREET_MAX: usize = 40;
/// Minimum product name length.
pub const PRODUCT_NAME_MIN: usize = 3;
/// Maximum product name length.
pub const PRODUCT_NAME_MAX: usize = 40;
/// Maximum notes length.
pub const NOTES_MAX: usize = 250;
/// Minimum phone length, including the leading `+`.
pub const PHONE_MIN: usize = 10;
/// Valid house numbers.
pub const HOUSE_RANGE: RangeInclusive<i64> = 1..=999;
/// Valid flat numbers.
pub const FLAT_RANGE: RangeInclusive<i64> = 1..=9999;
/// Valid product amounts.
pub const AMOUNT_RANGE: RangeInclusive<i64> = 0..=999;
/// Valid product prices.
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=99_999;

// ============================================================================
// SECTION: Violations
// ============================================================================

/// Character class permitted inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCharset {
    /// ASCII letters only.
    Alphabetic,
    /// ASCII letters and digits.
    Alphanumeric,
}

impl WordCharset {
    /// Returns true when `ch` belongs to the class.
    #[must_use]
    pub const fn accepts(self, ch: char) -> bool {
        match self {
            Self::Alphabetic => ch.is_ascii_alphabetic(),
            Self::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }
}

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Backend message for the rule.
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects violations for one payload.
#[derive(Debug, Default)]
struct Report {
    /// Violations in field order.
    violations: Vec<FieldViolation>,
}

impl Report {
    /// Records a violation when `ok` is false.
    fn require(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.violations.push(FieldViolation {
                field,
                message,
            });
        }
    }
}

// ============================================================================
// SECTION: Primitive Rules
// ============================================================================

/// Returns true when `value` is `min..=max` characters of `charset` words
/// separated by single spaces, with no leading or trailing space.
#[must_use]
pub fn is_spaced_words(value: &str, min: usize, max: usize, charset: WordCharset) -> bool {
    let len = value.chars().count();
    if len < min || len > max {
        return false;
    }
    value
        .split(' ')
        .all(|word| !word.is_empty() && word.chars().all(|ch| charset.accepts(ch)))
}

/// Returns true when `value` has the `local@domain.tld` shape.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && tld.len() >= 2
}

/// Returns true when `value` starts with `+` and is at least [`PHONE_MIN`] long.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    value.starts_with('+') && value.chars().count() >= PHONE_MIN
}

/// Returns true when `value` is at most [`NOTES_MAX`] characters without angle brackets.
#[must_use]
pub fn is_notes(value: &str) -> bool {
    value.chars().count() <= NOTES_MAX && !value.contains(['<', '>'])
}

// ============================================================================
// SECTION: Entity Checks
// ============================================================================

/// Checks a customer payload against every backend rule.
#[must_use]
pub fn check_customer(data: &CustomerData) -> Vec<FieldViolation> {
    let mut report = Report::default();
    report.require(is_email(&data.email), "email", validation::EMAIL);
    report.require(
        is_spaced_words(&data.name, 1, CUSTOMER_NAME_MAX, WordCharset::Alphabetic),
        "name",
        validation::CUSTOMER_NAME,
    );
    report.require(Country::contains(&data.country), "country", validation::COUNTRY);
    check_address_lines(&mut report, &data.city, &data.street, data.house, data.flat);
    report.require(is_phone(&data.phone), "phone", validation::PHONE);
    if let Some(notes) = &data.notes {
        report.require(is_notes(notes), "notes", validation::NOTES);
    }
    report.violations
}

/// Checks a product payload against every backend rule.
#[must_use]
pub fn check_product(data: &ProductData) -> Vec<FieldViolation> {
    let mut report = Report::default();
    report.require(
        is_spaced_words(&data.name, PRODUCT_NAME_MIN, PRODUCT_NAME_MAX, WordCharset::Alphanumeric),
        "name",
        validation::PRODUCTS_NAME,
    );
    report.require(AMOUNT_RANGE.contains(&data.amount), "amount", validation::AMOUNT);
    report.require(PRICE_RANGE.contains(&data.price), "price", validation::PRICE);
    report.require(
        Manufacturer::contains(&data.manufacturer),
        "manufacturer",
        validation::MANUFACTURER,
    );
    if let Some(notes) = &data.notes {
        report.require(is_notes(notes), "notes", validation::NOTES);
    }
    report.violations
}

/// Checks a delivery payload against every backend rule.
#[must_use]
pub fn check_delivery(data: &DeliveryData) -> Vec<FieldViolation> {
    let mut report = Report::default();
    check_address(&mut report, &data.address);
    report.require(
        DeliveryCondition::contains(&data.condition),
        "condition",
        validation::DELIVERY,
    );
    report.require(
        parse_api_date(&data.final_date).is_ok(),
        "finalDate",
        response::INVALID_DATE,
    );
    report.violations
}

/// Checks a delivery address.
fn check_address(report: &mut Report, address: &DeliveryAddress) {
    report.require(Country::contains(&address.country), "country", validation::COUNTRY);
    check_address_lines(report, &address.city, &address.street, address.house, address.flat);
}

/// Checks the city, street, house, and flat fields shared by customers and deliveries.
fn check_address_lines(report: &mut Report, city: &str, street: &str, house: i64, flat: i64) {
    report.require(
        is_spaced_words(city, 1, CITY_MAX, WordCharset::Alphabetic),
        "city",
        validation::CITY,
    );
    report.require(
        is_spaced_words(street, 1, STREET_MAX, WordCharset::Alphanumeric),
        "street",
        validation::STREET,
    );
    report.require(HOUSE_RANGE.contains(&house), "house", validation::HOUSE);
    report.require(FLAT_RANGE.contains(&flat), "flat", validation::FLAT);
}

// ============================================================================
// SECTION: Tests
// ============================================================================
