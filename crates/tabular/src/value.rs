//! Scalar values and their types.
//!
//! Every cell in a dataset holds a [`Value`]: tagged text, 64-bit integer, or
//! 64-bit real. Missing data is encoded in-band through per-type sentinels
//! rather than a separate null state, so a fully populated column stays a
//! plain sequence of values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Missing-value sentinel for text values.
pub const MISSING_TEXT: &str = "?";
/// Missing-value sentinel for integer values.
pub const MISSING_INTEGER: i64 = i64::MIN;
/// Missing-value sentinel for real values.
pub const MISSING_REAL: f64 = f64::NEG_INFINITY;

/// The scalar type of a [`Value`] or a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Text,
    Integer,
    Real,
}

impl ValueType {
    /// Returns true for [`ValueType::Text`].
    #[inline]
    pub fn is_text(self) -> bool {
        matches!(self, ValueType::Text)
    }

    /// Returns true for the two numeric types.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Real)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Real => "real",
        };
        f.write_str(name)
    }
}

/// A single typed cell value.
///
/// Conversions between representations never fail: text that does not parse
/// as a number converts to the numeric missing sentinel, which sorts below
/// every measurement.
///
/// # Example
///
/// ```
/// use tabular::{Value, ValueType};
///
/// let v = Value::parse("6.9", ValueType::Real)?;
/// assert_eq!(v.to_float(), 6.9);
/// assert_eq!(v.to_string(), "6.9");
/// # Ok::<(), tabular::DatasetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl Value {
    /// Parses `text` into a value of type `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ScalarParseFailure`] when `text` is not a
    /// valid integer or real literal. Parsing into [`ValueType::Text`] never
    /// fails.
    pub fn parse(text: &str, target: ValueType) -> Result<Value, DatasetError> {
        let parse_failure = || DatasetError::ScalarParseFailure {
            text: text.to_owned(),
            target,
        };
        match target {
            ValueType::Text => Ok(Value::Text(text.to_owned())),
            ValueType::Integer => text
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| parse_failure()),
            ValueType::Real => text
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| parse_failure()),
        }
    }

    /// The missing-value sentinel for `target`.
    pub fn missing(target: ValueType) -> Value {
        match target {
            ValueType::Text => Value::Text(MISSING_TEXT.to_owned()),
            ValueType::Integer => Value::Integer(MISSING_INTEGER),
            ValueType::Real => Value::Real(MISSING_REAL),
        }
    }

    /// The scalar type of this value.
    #[inline]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Text(_) => ValueType::Text,
            Value::Integer(_) => ValueType::Integer,
            Value::Real(_) => ValueType::Real,
        }
    }

    /// Whether this value is its type's missing-value sentinel.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Text(s) => s == MISSING_TEXT,
            Value::Integer(i) => *i == MISSING_INTEGER,
            Value::Real(f) => *f == MISSING_REAL,
        }
    }

    /// Float view of the value. Integers cast; unparsable text maps to
    /// [`MISSING_REAL`].
    pub fn to_float(&self) -> f64 {
        match self {
            Value::Text(s) => s.parse::<f64>().unwrap_or(MISSING_REAL),
            Value::Integer(i) => *i as f64,
            Value::Real(f) => *f,
        }
    }

    /// Integer view of the value. Reals truncate toward zero; unparsable
    /// text maps to [`MISSING_INTEGER`].
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Text(s) => s.parse::<i64>().unwrap_or(MISSING_INTEGER),
            Value::Integer(i) => *i,
            Value::Real(f) => *f as i64,
        }
    }

    /// Compares the rendered form of this value with `text`.
    pub fn text_eq(&self, text: &str) -> bool {
        match self {
            Value::Text(s) => s == text,
            _ => self.to_string() == text,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_owned())
    }
}
