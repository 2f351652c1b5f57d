//! Dynamic value model for the isit predicate set
//!
//! Predicates that take "any value" in a dynamically typed environment take
//! a [`Value`] here: a closed tagged union covering null, an absent value,
//! booleans, numbers, strings, sequences, and string-keyed mappings.

use std::collections::BTreeMap;

#[cfg(feature = "json")]
mod json;
pub mod kind;

pub use kind::ValueKind;

/// A dynamically classified value
///
/// Numbers are carried as `f64` so NaN is representable; mappings use a
/// `BTreeMap` for deterministic iteration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The explicit null value
    Null,
    /// An absent value
    Undefined,
    /// A boolean
    Bool(bool),
    /// A number
    Number(f64),
    /// A string
    String(String),
    /// A sequence of values
    Array(Vec<Value>),
    /// A string-keyed mapping
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Classify this value into its runtime kind
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Object(value)
    }
}

/// Identity-aware comparison over the value model
///
/// Unlike `==`, two NaN numbers count as the same value, while positive and
/// negative zero count as different values (the numbers compare by bit
/// pattern). Every other variant compares structurally.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
        }
        _ => a == b,
    }
}
