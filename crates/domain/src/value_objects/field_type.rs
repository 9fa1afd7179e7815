//! Declared type of a schema field

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Type a schema field declares for its values
///
/// Resolved once when the schema is loaded; each variant carries its own
/// acceptance rule so request handling never dispatches on type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Whole numbers
    Integer,
    /// Non-empty text
    String,
    /// Floating point numbers
    Number,
    /// Literal `true` / `false`
    Boolean,
}

impl FieldType {
    /// Check whether `value` can be interpreted as this type
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Integer => is_integer(value),
            Self::String => is_text(value),
            Self::Number => is_number(value),
            Self::Boolean => value.is_boolean(),
        }
    }

    /// Schema tag for this type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract().abs() < f64::EPSILON),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().is_ok() || s.parse::<u64>().is_ok()
        },
        _ => false,
    }
}

// Scalars render to non-empty text; null and containers do not count.
fn is_text(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_accepts_whole_numbers() {
        assert!(FieldType::Integer.accepts(&json!(1)));
        assert!(FieldType::Integer.accepts(&json!(-17)));
        assert!(FieldType::Integer.accepts(&json!(u64::MAX)));
        assert!(FieldType::Integer.accepts(&json!(3.0)));
    }

    #[test]
    fn integer_accepts_numeric_strings() {
        assert!(FieldType::Integer.accepts(&json!("42")));
        assert!(FieldType::Integer.accepts(&json!(" -7 ")));
    }

    #[test]
    fn integer_string_matches_number_above_i64() {
        assert!(FieldType::Integer.accepts(&json!(u64::MAX)));
        assert!(FieldType::Integer.accepts(&json!(u64::MAX.to_string())));
        assert!(!FieldType::Integer.accepts(&json!("18446744073709551616")));
    }

    #[test]
    fn integer_rejects_everything_else() {
        assert!(!FieldType::Integer.accepts(&json!(10.5)));
        assert!(!FieldType::Integer.accepts(&json!("10.5")));
        assert!(!FieldType::Integer.accepts(&json!("ten")));
        assert!(!FieldType::Integer.accepts(&json!(true)));
        assert!(!FieldType::Integer.accepts(&json!(null)));
        assert!(!FieldType::Integer.accepts(&json!([1])));
    }

    #[test]
    fn string_requires_non_empty_text() {
        assert!(FieldType::String.accepts(&json!("usd")));
        assert!(FieldType::String.accepts(&json!(5)));
        assert!(FieldType::String.accepts(&json!(false)));
        assert!(!FieldType::String.accepts(&json!("")));
        assert!(!FieldType::String.accepts(&json!(null)));
        assert!(!FieldType::String.accepts(&json!({"a": 1})));
        assert!(!FieldType::String.accepts(&json!(["usd"])));
    }

    #[test]
    fn number_accepts_numbers_and_numeric_strings() {
        assert!(FieldType::Number.accepts(&json!(10.5)));
        assert!(FieldType::Number.accepts(&json!(10)));
        assert!(FieldType::Number.accepts(&json!("1e3")));
        assert!(!FieldType::Number.accepts(&json!("NaN")));
        assert!(!FieldType::Number.accepts(&json!("inf")));
        assert!(!FieldType::Number.accepts(&json!("ten")));
        assert!(!FieldType::Number.accepts(&json!(true)));
        assert!(!FieldType::Number.accepts(&json!(null)));
    }

    #[test]
    fn boolean_is_strict() {
        assert!(FieldType::Boolean.accepts(&json!(true)));
        assert!(FieldType::Boolean.accepts(&json!(false)));
        assert!(!FieldType::Boolean.accepts(&json!("true")));
        assert!(!FieldType::Boolean.accepts(&json!(1)));
        assert!(!FieldType::Boolean.accepts(&json!(null)));
    }

    #[test]
    fn deserializes_from_lowercase_tags() {
        let t: FieldType = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(t, FieldType::Number);
        assert!(serde_json::from_str::<FieldType>("\"float\"").is_err());
    }
}
