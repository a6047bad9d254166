// crates/sales-portal-core/src/dates.rs
// ============================================================================
// Module: Backend Date Utilities
// Description: Formatting and parsing of the backend's `YYYY/MM/DD` dates.
// Purpose: Keep delivery dates in the one format the backend accepts.
// Dependencies: time, thiserror
// ============================================================================

//! ## Overview
//! The backend exchanges calendar dates as `YYYY/MM/DD` strings. "Today" is
//! the local calendar date; when the local offset cannot be determined UTC is
//! used. On Unix `time` refuses to read the local offset once a process has
//! more than one thread, which includes the default test harness, so in
//! practice "today" is the UTC date there. Between local midnight and UTC
//! midnight a generated date can therefore differ by one day from the
//! backend's local date; keep delivery offsets at least one day away from a
//! boundary the backend rejects.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::Date;
use time::Duration;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

// ============================================================================
// SECTION: Format
// ============================================================================

/// Backend date format, `YYYY/MM/DD`.
const API_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]/[month]/[day]");

/// Default day offset for delivery dates.
pub const DEFAULT_DELIVERY_OFFSET_DAYS: i64 = 7;
/// Seconds in one calendar day.
const SECONDS_PER_DAY: i64 = 86_400;

/// Error returned when a string is not a valid backend date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid api date '{value}': {reason}")]
pub struct DateFormatError {
    /// Rejected input.
    pub value: String,
    /// Parser diagnostic.
    pub reason: String,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Returns today's calendar date.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()).date()
}

/// Formats a date as `YYYY/MM/DD`.
#[must_use]
pub fn format_api_date(date: Date) -> String {
    // Four-digit years always format; the fallback covers years beyond 9999.
    date.format(API_DATE_FORMAT).unwrap_or_else(|_| {
        format!("{:04}/{:02}/{:02}", date.year(), u8::from(date.month()), date.day())
    })
}

/// Returns today plus `days_offset` days as a `Date`, saturating at the calendar bounds.
#[must_use]
pub fn date_from_today(days_offset: i64) -> Date {
    today().saturating_add(Duration::seconds(days_offset.saturating_mul(SECONDS_PER_DAY)))
}

/// Returns today plus `days_offset` days formatted as `YYYY/MM/DD`.
#[must_use]
pub fn api_date_from_today(days_offset: i64) -> String {
    format_api_date(date_from_today(days_offset))
}

/// Returns today (optionally offset) formatted as `YYYY/MM/DD`.
#[must_use]
pub fn current_date_string(days_offset: i64) -> String {
    api_date_from_today(days_offset)
}

/// Parses a `YYYY/MM/DD` string.
///
/// # Errors
///
/// Returns [`DateFormatError`] when the input does not match the format or
/// names a date that does not exist.
pub fn parse_api_date(text: &str) -> Result<Date, DateFormatError> {
    Date::parse(text, API_DATE_FORMAT).map_err(|err| DateFormatError {
        value: text.to_string(),
        reason: err.to_string(),
    })
}

/// Returns true when the date is strictly after today.
///
/// # Errors
///
/// Returns [`DateFormatError`] when the input is not a valid backend date.
pub fn date_is_in_the_future(text: &str) -> Result<bool, DateFormatError> {
    Ok(parse_api_date(text)? > today())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
