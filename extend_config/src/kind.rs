//! Classification of JSON values by the shape the merger cares about.

use std::fmt;

use serde_json::Value;

/// Structural kind of a [`Value`].
///
/// Only [`ValueKind::Mapping`] takes part in recursive merging; every other
/// kind replaces what it collides with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// A string-keyed object.
    Mapping,
    /// An ordered array.
    Sequence,
    /// The JSON `null` literal.
    Null,
    /// `true` or `false`.
    Bool,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
}

impl ValueKind {
    /// Returns the kind of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extend_config::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Mapping);
    /// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Sequence);
    /// assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
    /// ```
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Mapping,
            Value::Array(_) => Self::Sequence,
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
        }
    }

    /// Whether this kind merges recursively in deep mode.
    #[must_use]
    pub const fn is_mapping(self) -> bool {
        matches!(self, Self::Mapping)
    }

    /// Whether this kind is a primitive (boolean, number or string).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::Number | Self::String)
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
