//! Conversion of source-locale numeric strings into display/export values.
//!
//! The source publishes values in Indonesian convention: `.` for thousands,
//! `,` for decimals (`"15.300,00"`).

/// Marker rendered in place of a missing date/currency value.
pub const NO_DATA: &str = "-";

/// JPY is quoted per 100 units; its value is scaled down to a 1-unit rate.
pub const PER_HUNDRED_CURRENCY: &str = "JPY";

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    /// Comma-decimal display string, e.g. `"15300,00"`.
    Text(String),
    /// Plain numeric for the per-100-unit currency, e.g. `153.0`.
    Number(f64),
}

impl std::fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizedValue::Text(text) => write!(f, "{text}"),
            NormalizedValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Normalizes one localized rate value for `code`.
///
/// Thousands separators are stripped and the decimal mark canonicalized to
/// `.`. The per-100-unit currency is parsed and divided by 100, and stays a
/// plain numeric; every other code gets the comma decimal back for display.
/// Returns `None` when the scaled value does not parse as a number.
pub fn normalize(raw: &str, code: &str) -> Option<NormalizedValue> {
    let canonical = raw.replace('.', "").replacen(',', ".", 1);
    if code == PER_HUNDRED_CURRENCY {
        let value: f64 = canonical.parse().ok()?;
        Some(NormalizedValue::Number(value / 100.0))
    } else {
        Some(NormalizedValue::Text(canonical.replacen('.', ",", 1)))
    }
}
