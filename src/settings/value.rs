//! Lenient conversions from stored TOML values.
//!
//! Settings files are hand-editable, so a value of the wrong TOML type is
//! coerced when the intent is obvious (`"true"`, `"12"`) and reported as
//! malformed (`None`) otherwise.

use toml::Value;

/// Literal stored in place of a value the user chose not to remember.
pub const SENTINEL_NONE: &str = "none";

/// Returns true if the raw stored value is the `"none"` sentinel.
pub fn is_sentinel(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == SENTINEL_NONE)
}

pub fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Converts an array of strings (or a lone string) into a list.
///
/// Non-string array items are dropped.
pub fn to_string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_exact_string() {
        assert!(is_sentinel(&Value::String("none".into())));
        assert!(!is_sentinel(&Value::String("None".into())));
        assert!(!is_sentinel(&Value::Boolean(false)));
    }

    #[test]
    fn test_bool_from_string() {
        assert_eq!(to_bool(&Value::String("TRUE".into())), Some(true));
        assert_eq!(to_bool(&Value::String("yes".into())), None);
        assert_eq!(to_bool(&Value::Integer(1)), None);
    }

    #[test]
    fn test_int_from_string() {
        assert_eq!(to_int(&Value::String(" 42 ".into())), Some(42));
        assert_eq!(to_int(&Value::String("forty".into())), None);
        assert_eq!(to_int(&Value::Float(1.5)), None);
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let value = Value::Array(vec![
            Value::String("a".into()),
            Value::Integer(3),
            Value::String("b".into()),
        ]);
        assert_eq!(
            to_string_list(&value),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            to_string_list(&Value::String("x".into())),
            Some(vec!["x".to_string()])
        );
    }
}
