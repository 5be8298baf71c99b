//! Value enum for dynamic field values

use serde::{Deserialize, Serialize};

/// A dynamic value that can hold any form field type.
///
/// This enum represents all values the validation mechanism accepts from
/// a host form library. It imposes no structural constraints of its own;
/// individual validators decide which kinds they accept.
///
/// Absence: only [`Value::Null`] is absent. A key missing from a values
/// map is treated identically to an explicit `Null`.
///
/// Falsy-ness: `Null`, `false`, numeric zero (and NaN), and the empty
/// string are falsy; everything else is truthy. Rules such as
/// [`pattern`](crate::validation::rules::pattern) fail on any falsy
/// value, while [`required`](crate::validation::rules::required) only
/// checks absence.
///
/// # Example
///
/// ```
/// use formwork::Value;
///
/// let name = Value::from("Contoso");
/// let count = Value::from(42);
/// let active = Value::from(true);
/// let empty = Value::Null;
///
/// assert!(!name.is_falsy());
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for null, `false`, numeric zero or NaN, and the
    /// empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
        }
    }

    /// Returns the string contents for a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
