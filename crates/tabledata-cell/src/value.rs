//! Raw and typed cell values.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;

/// A raw cell value as supplied by the caller, before type detection.
///
/// Text cells are stored verbatim; whether `"1.1"` means the number 1.1 or
/// the literal string is decided later by a
/// [`ValueCoercer`](crate::ValueCoercer).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns true for the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// NaN-tolerant: two NaN cells compare equal so that a table containing NaN
// stays equal to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
            (Value::Int(lhs), Value::Int(rhs)) => lhs == rhs,
            (Value::Float(lhs), Value::Float(rhs)) => float_eq(*lhs, *rhs),
            (Value::Text(lhs), Value::Text(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A typed cell value produced by coercion.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(DateTime<FixedOffset>),
}

impl CellValue {
    /// Returns true for the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Semantic value comparison across numeric representations.
    ///
    /// `Int(2)` and `Float(2.0)` are loosely equal even though they are
    /// strictly distinct. Non-numeric variants compare the same way as `==`.
    #[must_use]
    pub fn loosely_equals(&self, other: &CellValue) -> bool {
        match (self, other) {
            (CellValue::Int(lhs), CellValue::Float(rhs))
            | (CellValue::Float(rhs), CellValue::Int(lhs)) => float_eq(*lhs as f64, *rhs),
            _ => self == other,
        }
    }
}

// Same NaN tolerance as `Value`: table equality must be reflexive.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(lhs), CellValue::Bool(rhs)) => lhs == rhs,
            (CellValue::Int(lhs), CellValue::Int(rhs)) => lhs == rhs,
            (CellValue::Float(lhs), CellValue::Float(rhs)) => float_eq(*lhs, *rhs),
            (CellValue::Text(lhs), CellValue::Text(rhs)) => lhs == rhs,
            (CellValue::DateTime(lhs), CellValue::DateTime(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Text(value) => write!(f, "{value}"),
            CellValue::DateTime(value) => {
                write!(f, "{}", value.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

fn float_eq(lhs: f64, rhs: f64) -> bool {
    (lhs.is_nan() && rhs.is_nan()) || lhs == rhs
}
