//! Runtime kind classification for the value model
//!
//! This module contains the closed set of kinds a dynamically classified
//! value can take, plus conversions to canonical kind names.

/// Runtime kinds a [`Value`](crate::Value) can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// The explicit null value
    Null,
    /// An absent value
    Undefined,
    /// A boolean
    Bool,
    /// A number (carried as f64, so NaN is representable)
    Number,
    /// A string
    String,
    /// A sequence of values
    Array,
    /// A string-keyed mapping
    Object,
}

impl ValueKind {
    /// Canonical lowercase name for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
