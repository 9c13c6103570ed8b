//! Numeric text rendering and parsing for stepper fields.
//!
//! The store keeps the displayed text derived from the committed value;
//! these two functions are the only conversion point. [`format_value`] is an
//! exact inverse of [`parse_value`] for every value a store can commit.

use std::error::Error;
use std::fmt;

/// Error returned when field text does not parse as a finite number.
///
/// This is deliberately a sentinel, not a substituted value: the caller
/// (command routing) owns the fallback policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseValueError;

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("text does not parse as a finite number")
    }
}

impl Error for ParseValueError {}

/// Render a committed value as field text.
///
/// Uses the shortest decimal form that reads back as exactly the same
/// double, so `parse_value(&format_value(v))` returns `Ok(v)` for any
/// committed value.
///
/// # Examples
///
/// ```
/// use spin_core::format_value;
///
/// assert_eq!(format_value(0.0), "0");
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(-13.0), "-13");
/// ```
#[inline]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Parse field text into a value.
///
/// Surrounding whitespace is ignored. Anything that does not read as a
/// finite double (including empty text and `NaN`/`inf` spellings) is a
/// [`ParseValueError`].
///
/// # Examples
///
/// ```
/// use spin_core::parse_value;
///
/// assert_eq!(parse_value("42"), Ok(42.0));
/// assert_eq!(parse_value("  -0.5 "), Ok(-0.5));
/// assert!(parse_value("").is_err());
/// assert!(parse_value("12 apples").is_err());
/// ```
pub fn parse_value(text: &str) -> Result<f64, ParseValueError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseValueError),
    }
}
