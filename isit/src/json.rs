//! JSON predicate support built on serde_json

use isit_core::{is_array, is_object, Value};

/// Parse a JSON document into the value model
///
/// Integers widen to `f64` on the way in. Parse failures surface as
/// serde_json's own error type.
pub fn parse_value(input: &str) -> Result<Value, serde_json::Error> {
    let tree: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(tree))
}

/// Check whether a string is a JSON document with an array or object root
///
/// Scalar roots (`"42"`, `"\"text\""`, `"null"`) and unparseable input
/// both report false.
pub fn is_json(input: &str) -> bool {
    match parse_value(input) {
        Ok(root) => is_array(&root) || is_object(&root),
        Err(_) => false,
    }
}
