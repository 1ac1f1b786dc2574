//! Customer phone number normalization.
//!
//! Phone numbers are stored in the canonical North American display form
//! `(555) 555-5555`. Any input carrying exactly ten digits is accepted and
//! reformatted; everything else is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("valid phone regex"));

/// Number of digits a phone number must contain.
pub const PHONE_DIGITS: usize = 10;

/// Normalize a phone number into `(555) 555-5555`.
pub fn normalize_phone(input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    if CANONICAL.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return Err(CoreError::Validation(
            "Phone number must be in the format `(555) 555-5555` and 10 digits long".into(),
        ));
    }

    Ok(format!(
        "({}) {}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}
