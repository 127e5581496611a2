//! Cell formatting: converting one raw [`Value`] into display text.
//!
//! Each column carries one [`CellFormat`]. Formatting is total — malformed
//! input degrades to sentinel text (`"NaN"`, `"null"`, `"undefined"`)
//! instead of failing.

use std::fmt;
use std::sync::Arc;

use chrono::SecondsFormat;

use crate::value::Value;

/// Placeholder text for structured (non-primitive) values under generic
/// formatting.
const OBJECT_PLACEHOLDER: &str = "[object]";

/// A per-column formatting strategy, `Value → text`.
#[derive(Clone)]
pub enum CellFormat {
    /// Natural textual representation, trimmed of surrounding whitespace.
    Generic,
    /// Numeric with a fixed number of decimal places, right after coercion
    /// via [`coerce_number`]. Failed coercion renders `"NaN"`.
    Fixed(u32),
    /// Numeric, multiplied by `factor` before fixed-formatting to `places`
    /// decimals, with `suffix` appended verbatim. The suffix carries any
    /// needed separator; no space is auto-inserted.
    Scaled {
        /// Multiplier applied before formatting.
        factor: f64,
        /// Number of fixed decimal places.
        places: u32,
        /// Unit text appended to the formatted number.
        suffix: String,
    },
    /// A caller-supplied formatting function.
    Custom(Arc<dyn Fn(&Value) -> String + Send + Sync>),
}

impl CellFormat {
    /// Creates a scaled-unit numeric format.
    ///
    /// # Example
    ///
    /// ```
    /// use text_table::{CellFormat, Value};
    ///
    /// let percent = CellFormat::scaled(100.0, 0, "%");
    /// assert_eq!(percent.apply(&Value::Float(0.5)), "50%");
    /// ```
    pub fn scaled(factor: f64, places: u32, suffix: impl Into<String>) -> Self {
        Self::Scaled {
            factor,
            places,
            suffix: suffix.into(),
        }
    }

    /// Wraps a caller-supplied formatting function.
    pub fn custom(f: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Formats one raw value as display text.
    ///
    /// # Example
    ///
    /// ```
    /// use text_table::{CellFormat, Value};
    ///
    /// assert_eq!(CellFormat::Generic.apply(&Value::from(" trim  ")), "trim");
    /// assert_eq!(CellFormat::Fixed(2).apply(&Value::from(37.5)), "37.50");
    /// assert_eq!(CellFormat::Fixed(2).apply(&Value::from("bla")), "NaN");
    /// ```
    pub fn apply(&self, value: &Value) -> String {
        match self {
            Self::Generic => format_generic(value),
            Self::Fixed(places) => format_fixed(coerce_number(value), *places),
            Self::Scaled {
                factor,
                places,
                suffix,
            } => {
                let formatted = format_fixed(coerce_number(value) * factor, *places);
                format!("{formatted}{suffix}")
            }
            Self::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for CellFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "Generic"),
            Self::Fixed(places) => f.debug_tuple("Fixed").field(places).finish(),
            Self::Scaled {
                factor,
                places,
                suffix,
            } => f
                .debug_struct("Scaled")
                .field("factor", factor)
                .field("places", places)
                .field("suffix", suffix)
                .finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Coerces a raw value to a number for the fixed-decimal formatters.
///
/// The table is contractual:
///
/// | input                | result |
/// |----------------------|--------|
/// | `Int` / `Float`      | the number itself |
/// | numeric-looking text | the parsed number (whitespace-trimmed) |
/// | empty text           | `0` |
/// | `Bool(false)` / `Null` | `0` |
/// | `Bool(true)`         | `1` |
/// | everything else      | NaN |
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Undefined | Value::Date(_) | Value::Json(_) => f64::NAN,
    }
}

fn format_generic(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => s.trim().to_string(),
        Value::Date(d) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
        Value::Json(_) => OBJECT_PLACEHOLDER.to_string(),
    }
}

/// Fixed-decimal formatting with round-half-away-from-zero.
fn format_fixed(value: f64, places: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let scale = 10f64.powi(places as i32);
    let magnitude = (value.abs() * scale + 0.5).floor() / scale;
    let rounded = if value < 0.0 { -magnitude } else { magnitude };
    format!("{:.prec$}", rounded, prec = places as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_generic_text() {
        assert_eq!(CellFormat::Generic.apply(&Value::from("string")), "string");
        assert_eq!(CellFormat::Generic.apply(&Value::from("")), "");
        assert_eq!(CellFormat::Generic.apply(&Value::from(" trim  ")), "trim");
    }

    #[test]
    fn test_generic_sentinels() {
        assert_eq!(CellFormat::Generic.apply(&Value::Null), "null");
        assert_eq!(CellFormat::Generic.apply(&Value::Undefined), "undefined");
    }

    #[test]
    fn test_generic_numbers_and_bools() {
        assert_eq!(CellFormat::Generic.apply(&Value::from(17.345)), "17.345");
        assert_eq!(CellFormat::Generic.apply(&Value::from(42)), "42");
        assert_eq!(CellFormat::Generic.apply(&Value::from(true)), "true");
    }

    #[test]
    fn test_generic_date_is_iso8601() {
        let date = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(
            CellFormat::Generic.apply(&Value::from(date)),
            "2021-03-14T09:26:53.000Z"
        );
    }

    #[test]
    fn test_generic_structured_placeholder() {
        let v = Value::from(json!({ "bla": 5 }));
        assert_eq!(CellFormat::Generic.apply(&v), "[object]");
    }

    #[test]
    fn test_fixed_coercion_table() {
        let fixed = CellFormat::Fixed(2);
        assert_eq!(fixed.apply(&Value::from(1)), "1.00");
        assert_eq!(fixed.apply(&Value::from(0.123)), "0.12");
        assert_eq!(fixed.apply(&Value::from(123.456)), "123.46");
        assert_eq!(fixed.apply(&Value::Null), "0.00");
        assert_eq!(fixed.apply(&Value::from(false)), "0.00");
        assert_eq!(fixed.apply(&Value::from(true)), "1.00");
        assert_eq!(fixed.apply(&Value::Undefined), "NaN");
        assert_eq!(fixed.apply(&Value::from("bla")), "NaN");
        assert_eq!(fixed.apply(&Value::from("123")), "123.00");
        assert_eq!(fixed.apply(&Value::from("")), "0.00");
    }

    #[test]
    fn test_fixed_rounds_half_away_from_zero() {
        assert_eq!(CellFormat::Fixed(0).apply(&Value::from(0.123456)), "0");
        assert_eq!(CellFormat::Fixed(1).apply(&Value::from(0.123456)), "0.1");
        assert_eq!(CellFormat::Fixed(4).apply(&Value::from(0.123456)), "0.1235");
        assert_eq!(
            CellFormat::Fixed(5).apply(&Value::from(0.123456)),
            "0.12346"
        );
        assert_eq!(CellFormat::Fixed(2).apply(&Value::from(-0.125)), "-0.13");
    }

    #[test]
    fn test_fixed_appends_zero_decimals() {
        assert_eq!(CellFormat::Fixed(3).apply(&Value::from(1.0)), "1.000");
        assert_eq!(CellFormat::Fixed(3).apply(&Value::from(1.1)), "1.100");
    }

    #[test]
    fn test_scaled_factor_and_places() {
        let percent = CellFormat::scaled(100.0, 0, "%");
        assert_eq!(percent.apply(&Value::from(1.0)), "100%");
        assert_eq!(percent.apply(&Value::from(0.5)), "50%");

        let plain = CellFormat::scaled(1.0, 1, "%");
        assert_eq!(plain.apply(&Value::from(100.0)), "100.0%");
        assert_eq!(plain.apply(&Value::from(58.254)), "58.3%");
    }

    #[test]
    fn test_scaled_suffix_verbatim() {
        let stars = CellFormat::scaled(100.0, 0, " **");
        assert_eq!(stars.apply(&Value::from(1.0)), "100 **");
        assert_eq!(stars.apply(&Value::from(0.5)), "50 **");
    }

    #[test]
    fn test_scaled_nan_keeps_suffix() {
        let percent = CellFormat::scaled(100.0, 0, "%");
        assert_eq!(percent.apply(&Value::from("bla")), "NaN%");
    }

    #[test]
    fn test_custom_format() {
        let shout = CellFormat::custom(|v| CellFormat::Generic.apply(v).to_uppercase());
        assert_eq!(shout.apply(&Value::from("hi")), "HI");
    }

    #[test]
    fn test_coerce_number_dates_and_structured() {
        let date = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert!(coerce_number(&Value::from(date)).is_nan());
        assert!(coerce_number(&Value::from(json!([1, 2]))).is_nan());
    }
}
