//! Field validation for user-entered form values.
//!
//! [`validate`] is a pure function: it looks at a field name and the raw string
//! the user typed and either accepts it or returns a [`ValidationError`] whose
//! `Display` text is shown to the user before the field is asked again.

use thiserror::Error;

/// Latest publication year accepted by the `year` field.
pub const MAX_YEAR: u32 = 2024;

/// Minimum character count for `title` and `author`.
pub const MIN_TEXT_LEN: usize = 3;

/// Why a raw form value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("--- Invalid input: id must be a number greater than 0 ---")]
    InvalidId,

    #[error("--- Invalid input: value must be at least 3 characters long ---")]
    TooShort,

    #[error("--- Invalid input: year must be a number from 0 to 2024 ---")]
    InvalidYear,
}

/// Checks `value` against the rules for `field`.
///
/// - `id`: all ASCII digits and greater than zero
/// - `title`, `author`: at least [`MIN_TEXT_LEN`] characters, any content
/// - `year`: all ASCII digits and between 0 and [`MAX_YEAR`] inclusive
/// - anything else is accepted unchecked
///
/// # Errors
///
/// Returns the matching [`ValidationError`] when the value breaks the rule.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::validation::{validate, ValidationError};
///
/// assert!(validate("year", "0").is_ok());
/// assert_eq!(validate("year", "2030"), Err(ValidationError::InvalidYear));
/// assert!(validate("title", "123").is_ok());
/// ```
pub fn validate(field: &str, value: &str) -> Result<(), ValidationError> {
    match field {
        "id" => match parse_digits(value) {
            Some(id) if id > 0 => Ok(()),
            _ => Err(ValidationError::InvalidId),
        },
        "title" | "author" => {
            if value.chars().count() < MIN_TEXT_LEN {
                Err(ValidationError::TooShort)
            } else {
                Ok(())
            }
        }
        "year" => match parse_digits(value) {
            Some(year) if year <= u64::from(MAX_YEAR) => Ok(()),
            _ => Err(ValidationError::InvalidYear),
        },
        _ => Ok(()),
    }
}

/// Parses a non-empty string made only of ASCII digits.
///
/// Values too large for `u64` saturate so that huge ids or years are still
/// rejected by range rather than treated as non-numeric.
fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.parse::<u64>().unwrap_or(u64::MAX))
}
