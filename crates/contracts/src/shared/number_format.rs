//! Number formatting that matches how a browser stringifies JSON numbers

use serde_json::Number;

/// Browsers switch to exponent notation at and above this magnitude
const EXPONENT_UPPER: f64 = 1e21;
/// ...and below this one
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a JSON number the way `String(n)` does in a browser
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_number;
/// let n = serde_json::Number::from_f64(30.0).unwrap();
/// assert_eq!(format_number(&n), "30");
/// ```
pub fn format_number(number: &Number) -> String {
    if let Some(v) = number.as_i64() {
        return v.to_string();
    }
    if let Some(v) = number.as_u64() {
        return v.to_string();
    }
    match number.as_f64() {
        Some(v) => format_f64(v),
        None => number.to_string(),
    }
}

/// Formats a float without a trailing `.0` for integral values
pub fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 тоже печатается как "0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
