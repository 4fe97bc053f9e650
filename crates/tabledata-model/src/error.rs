//! Error types for table data operations.

use thiserror::Error;

/// Errors produced by table data operations.
#[derive(Debug, Error)]
pub enum TableDataError {
    /// The operation requires non-empty data.
    #[error("table data is empty")]
    EmptyData,

    /// Row data cannot be interpreted as a column-addressable record.
    #[error("invalid row data: {message}")]
    InvalidData { message: String },

    /// A positional row does not match the header width.
    #[error("row {row} has {actual} values, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A column filter pattern failed to compile.
    #[error("invalid column pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TableDataError {
    /// Create an InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a RowShape error.
    #[must_use]
    pub fn row_shape(row: usize, expected: usize, actual: usize) -> Self {
        Self::RowShape {
            row,
            expected,
            actual,
        }
    }

    /// True for the shape view of invalid row data.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::RowShape { .. })
    }
}

/// Result type alias for table data operations.
pub type Result<T> = std::result::Result<T, TableDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableDataError::row_shape(1, 2, 3);
        assert_eq!(format!("{err}"), "row 1 has 3 values, expected 2");
        assert!(err.is_shape_error());

        let err = TableDataError::invalid_data("not a record");
        assert_eq!(format!("{err}"), "invalid row data: not a record");
        assert!(!err.is_shape_error());
    }
}
