//! Shape classification predicates over the value model
//!
//! Pure functions that classify a [`Value`] by its runtime kind or
//! emptiness. No I/O, no ambient state.

use crate::value::{same_value, Value, ValueKind};

/// Check whether a value is a sequence
pub fn is_array(value: &Value) -> bool {
    value.kind() == ValueKind::Array
}

/// Check whether a value is a plain mapping
///
/// Sequences and null are different kinds and never count as objects.
pub fn is_object(value: &Value) -> bool {
    value.kind() == ValueKind::Object
}

/// Check whether a value is of a primitive kind
///
/// Primitive kinds are strings, numbers, booleans, and the absent value.
/// Null and the container kinds are not primitive.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value.kind(),
        ValueKind::String | ValueKind::Number | ValueKind::Bool | ValueKind::Undefined
    )
}

/// Check whether a value is an empty container or empty string
///
/// Strings and sequences are empty at length 0, mappings at zero entries.
/// Kinds without a length are never empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Report `false` for any canonical falsy sentinel, emptiness otherwise
///
/// The sentinels are the empty string, `0`, `false`, NaN, the absent value,
/// and null, matched with [`same_value`] so NaN is caught and `-0.0` is
/// not. Every other value reports [`is_empty`].
pub fn is_false(value: &Value) -> bool {
    let sentinels = [
        Value::String(String::new()),
        Value::Number(0.0),
        Value::Bool(false),
        Value::Number(f64::NAN),
        Value::Undefined,
        Value::Null,
    ];
    if sentinels.iter().any(|sentinel| same_value(value, sentinel)) {
        return false;
    }
    is_empty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn object_with_one_entry() -> Value {
        Value::Object(BTreeMap::from([("a".to_string(), Value::Number(1.0))]))
    }

    #[test]
    fn test_is_array() {
        assert!(is_array(&Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0)
        ])));
        assert!(is_array(&Value::Array(vec![])));

        assert!(!is_array(&Value::Object(BTreeMap::new())));
        assert!(!is_array(&Value::String("[]".to_string())));
        assert!(!is_array(&Value::Null));
    }

    #[test]
    fn test_is_object() {
        assert!(is_object(&Value::Object(BTreeMap::new())));
        assert!(is_object(&object_with_one_entry()));

        assert!(!is_object(&Value::Array(vec![])));
        assert!(!is_object(&Value::Null));
        assert!(!is_object(&Value::Undefined));
    }

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive(&Value::String("x".to_string())));
        assert!(is_primitive(&Value::Number(0.0)));
        assert!(is_primitive(&Value::Bool(false)));
        assert!(is_primitive(&Value::Undefined));

        assert!(!is_primitive(&Value::Null));
        assert!(!is_primitive(&Value::Array(vec![])));
        assert!(!is_primitive(&Value::Object(BTreeMap::new())));
    }

    #[test]
    fn test_is_empty_containers() {
        assert!(is_empty(&Value::Array(vec![])));
        assert!(is_empty(&Value::Object(BTreeMap::new())));
        assert!(is_empty(&Value::String(String::new())));

        assert!(!is_empty(&Value::Array(vec![Value::Number(1.0)])));
        assert!(!is_empty(&object_with_one_entry()));
        assert!(!is_empty(&Value::String("x".to_string())));
    }

    #[test]
    fn test_is_empty_never_true_for_scalars() {
        assert!(!is_empty(&Value::Null));
        assert!(!is_empty(&Value::Undefined));
        assert!(!is_empty(&Value::Bool(false)));
        assert!(!is_empty(&Value::Number(0.0)));
    }

    #[test]
    fn test_is_false_sentinels() {
        assert!(!is_false(&Value::String(String::new())));
        assert!(!is_false(&Value::Number(0.0)));
        assert!(!is_false(&Value::Bool(false)));
        assert!(!is_false(&Value::Number(f64::NAN)));
        assert!(!is_false(&Value::Undefined));
        assert!(!is_false(&Value::Null));
    }

    #[test]
    fn test_is_false_reports_emptiness_otherwise() {
        assert!(is_false(&Value::Array(vec![])));
        assert!(is_false(&Value::Object(BTreeMap::new())));

        assert!(!is_false(&Value::Array(vec![Value::Number(1.0)])));
        assert!(!is_false(&object_with_one_entry()));
        assert!(!is_false(&Value::String("x".to_string())));
        assert!(!is_false(&Value::Bool(true)));
    }

    #[test]
    fn test_is_false_negative_zero_is_not_the_zero_sentinel() {
        // -0.0 misses the sentinel list and, as a scalar, is never empty
        assert!(!is_false(&Value::Number(-0.0)));
    }
}
