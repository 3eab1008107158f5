//! Normalizers for string-encoded currency and percentage fields.
//!
//! The lenient functions never fail: anything that does not read as a finite
//! number becomes `0.0`, so one malformed upstream cell cannot blank a whole
//! dashboard. The `_strict` variants report a [`ParseError`] instead and are
//! what the derivation layer uses to log and collect those defaults.
//!
//! All four functions are pure.

use crate::error::ParseError;
use crate::record::RawField;

/// Parses a currency value such as `"$1,234.50"` into `1234.5`.
///
/// Numeric input passes through unchanged. Returns `0.0` when the text does
/// not parse.
#[must_use]
pub fn parse_currency(value: &RawField) -> f64 {
    parse_currency_strict("value", value).unwrap_or(0.0)
}

/// Parses a percentage value such as `"12.34%"` into `12.34` (percentage
/// points, not a fraction).
///
/// Numeric input passes through unchanged. Returns `0.0` when the text does
/// not parse.
#[must_use]
pub fn parse_percentage(value: &RawField) -> f64 {
    parse_percentage_strict("value", value).unwrap_or(0.0)
}

/// Validating form of [`parse_currency`].
///
/// # Errors
///
/// Returns [`ParseError`] carrying `field` and the raw text when the value,
/// with `$` and `,` removed, is not a finite decimal number.
pub fn parse_currency_strict(field: &str, value: &RawField) -> Result<f64, ParseError> {
    parse_stripped(field, value, |c| c == '$' || c == ',')
}

/// Validating form of [`parse_percentage`].
///
/// # Errors
///
/// Returns [`ParseError`] carrying `field` and the raw text when the value,
/// with `%` removed, is not a finite decimal number.
pub fn parse_percentage_strict(field: &str, value: &RawField) -> Result<f64, ParseError> {
    parse_stripped(field, value, |c| c == '%')
}

fn parse_stripped(
    field: &str,
    value: &RawField,
    is_decoration: impl Fn(char) -> bool,
) -> Result<f64, ParseError> {
    match value {
        RawField::Number(n) if n.is_finite() => Ok(*n),
        RawField::Number(n) => Err(ParseError::new(field, n.to_string())),
        RawField::Text(raw) => {
            let cleaned: String = raw.chars().filter(|&c| !is_decoration(c)).collect();
            // `f64::from_str` accepts "inf" and "NaN"; neither is a usable metric.
            cleaned
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::new(field, raw.as_str()))
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
