// crates/sales-portal-datagen/src/text.rs
// ============================================================================
// Module: Text Shaping
// Description: Sanitizers that turn realistic fake text into backend-valid text.
// Purpose: Guarantee generated names, cities, and streets pass field rules.
// Dependencies: sales-portal-core, rand
// ============================================================================

//! ## Overview
//! Fake-data sources produce text with punctuation, accents, and arbitrary
//! length. [`sanitize_words`] keeps only characters of the field's class,
//! joins the surviving words with single spaces, truncates to the field's
//! maximum, and substitutes a fallback when nothing survives.

use rand::Rng;
use sales_portal_core::constraints::WordCharset;

/// Fallback for name-like fields.
pub const NAME_FALLBACK: &str = "John";
/// Fallback for address-like fields.
pub const STREET_FALLBACK: &str = "Main";
/// Number of digits after the `+` in generated phone numbers.
pub const PHONE_DIGITS: usize = 14;

/// Shapes `text` into `charset` words separated by single spaces, at most
/// `max_len` characters, or `fallback` when nothing valid remains.
#[must_use]
pub fn sanitize_words(text: &str, max_len: usize, charset: WordCharset, fallback: &str) -> String {
    let joined = text
        .split_whitespace()
        .map(|word| word.chars().filter(|ch| charset.accepts(*ch)).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let truncated: String = joined.chars().take(max_len).collect();
    let trimmed = truncated.trim_end();
    if trimmed.is_empty() { fallback.to_string() } else { trimmed.to_string() }
}

/// Returns `+` followed by [`PHONE_DIGITS`] random digits.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut phone = String::with_capacity(PHONE_DIGITS + 1);
    phone.push('+');
    phone.extend((0..PHONE_DIGITS).map(|_| random_digit(rng)));
    phone
}

/// Returns one random ASCII digit.
pub(crate) fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10_u8))
}

/// Returns one random ASCII letter of either case.
pub(crate) fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let offset = rng.gen_range(0..52_u8);
    if offset < 26 { char::from(b'a' + offset) } else { char::from(b'A' + offset - 26) }
}
