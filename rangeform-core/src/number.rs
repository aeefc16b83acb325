//! Locale-independent decimal parsing and formatting.
//!
//! Configuration attributes and saved values always use the C numeric
//! format: `.` as the decimal separator and no digit grouping. Nothing in
//! here reads or mutates process locale state.

use crate::error::ParameterError;

/// Parse a decimal attribute, falling back to `0.0` on anything malformed.
///
/// Surrounding whitespace is ignored. Empty strings, garbage, and
/// non-finite spellings (`inf`, `NaN`) all yield `0.0`.
pub fn parse_lenient(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a decimal attribute, reporting malformed input as an error.
pub fn parse_strict(attribute: &str, text: &str) -> Result<f64, ParameterError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParameterError::MalformedAttribute {
            attribute: attribute.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Round `value` to `decimals` places after the decimal point.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a value as a plain decimal string.
///
/// Uses the shortest representation that round-trips, so `7.5` prints as
/// `"7.5"` and `10.0` as `"10"`. Negative zero prints as `"0"`.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
