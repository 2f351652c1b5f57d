//! Conversions between the value model and serde_json trees

use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // arbitrary-precision numbers have no f64 form
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            // JSON has no undefined
            Value::Null | Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Value, ValueKind};
    use serde_json::json;

    #[test]
    fn test_json_tree_to_value() {
        let value = Value::from(json!({"name": "ada", "tags": [1, true, null]}));
        assert_eq!(value.kind(), ValueKind::Object);
        match &value {
            Value::Object(entries) => {
                assert_eq!(entries["name"], Value::String("ada".to_string()));
                assert_eq!(
                    entries["tags"],
                    Value::Array(vec![Value::Number(1.0), Value::Bool(true), Value::Null])
                );
            }
            other => panic!("expected an object, got {:?}", other),
        }
    }

    #[test]
    fn test_integers_widen_to_f64() {
        assert_eq!(Value::from(json!(2)), Value::Number(2.0));
        assert_eq!(Value::from(json!(-7)), Value::Number(-7.0));
    }

    #[test]
    fn test_value_to_json_scalars() {
        assert_eq!(serde_json::Value::from(Value::Null), json!(null));
        assert_eq!(serde_json::Value::from(Value::Undefined), json!(null));
        assert_eq!(serde_json::Value::from(Value::Bool(true)), json!(true));
        assert_eq!(serde_json::Value::from(Value::Number(1.5)), json!(1.5));
        assert_eq!(
            serde_json::Value::from(Value::String("x".to_string())),
            json!("x")
        );
    }

    #[test]
    fn test_nonfinite_numbers_land_as_null() {
        assert_eq!(serde_json::Value::from(Value::Number(f64::NAN)), json!(null));
        assert_eq!(
            serde_json::Value::from(Value::Number(f64::INFINITY)),
            json!(null)
        );
    }

    #[test]
    fn test_containers_survive_a_round_trip() {
        // Integer-free fixture: integers widen to floats on the way in
        let tree = json!([{"a": []}, "x", true, null, 2.5]);
        assert_eq!(serde_json::Value::from(Value::from(tree.clone())), tree);
    }
}
