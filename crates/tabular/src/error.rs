//! Error types returned by dataset operations.

use thiserror::Error;

use crate::value::ValueType;

/// Errors produced by fallible dataset operations.
///
/// Operations validate their inputs before touching any state: when an `Err`
/// comes back, the dataset and any outputs are unchanged.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A column index points outside the dataset's schema.
    #[error("column index {index} out of range for {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    /// An operation required a column of a different type.
    #[error("invalid column type {got}, expected {expected}")]
    InvalidColumnType { expected: &'static str, got: ValueType },

    /// Text could not be parsed into the requested scalar type.
    #[error("cannot parse {text:?} as {target} value")]
    ScalarParseFailure { text: String, target: ValueType },

    /// A bulk parameter does not line up with the dataset's columns.
    #[error("column selection entry {index} does not fit {len} columns")]
    ColumnLengthMismatch { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DatasetError::ColumnIndexOutOfRange { index: 9, len: 3 };
        assert_eq!(err.to_string(), "column index 9 out of range for 3 columns");

        let err = DatasetError::ScalarParseFailure {
            text: "4.5".into(),
            target: ValueType::Integer,
        };
        assert_eq!(err.to_string(), "cannot parse \"4.5\" as integer value");
    }
}
