//! Raw cell values accepted by the table renderer.
//!
//! A data matrix is a sequence of rows, each a sequence of [`Value`]s. Rows
//! are not required to be rectangular; reading past the end of a row yields
//! [`Value::Undefined`].

use chrono::{DateTime, Utc};

/// A single raw cell value.
///
/// Every variant has a defined textual fallback under every formatter, so
/// rendering never fails on malformed input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicit null. Renders as `"null"` and coerces to `0` under
    /// numeric formatting.
    Null,
    /// An unset value, also the sentinel for reading past the end of a row.
    /// Renders as `"undefined"` and coerces to NaN under numeric formatting.
    Undefined,
    /// A boolean. `false` coerces to `0`, `true` to `1`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// Text. Numeric-looking text coerces to its number.
    Str(String),
    /// A timestamp. Renders in its canonical ISO-8601 form.
    Date(DateTime<Utc>),
    /// A structured (non-primitive) value. Renders as a placeholder.
    Json(serde_json::Value),
}

impl Value {
    /// Returns true for the natively numeric variants.
    ///
    /// Used by column inference: a numeric first-row value selects a
    /// right-aligned fixed-decimal column.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Str(s),
            other => Self::Json(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_numeric() {
        assert!(Value::Int(1).is_numeric());
        assert!(Value::Float(1.5).is_numeric());
        assert!(!Value::Str("1".into()).is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::Null.is_numeric());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(json!("hi")), Value::Str("hi".into()));
    }

    #[test]
    fn test_from_json_structured() {
        let v = Value::from(json!({ "bla": 5 }));
        assert!(matches!(v, Value::Json(_)));
    }
}
