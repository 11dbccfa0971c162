//! Error types for the result reader
//!
//! Every failure surfaced by the reader maps to one of these variants. None of
//! them disturb the cursor position, so a caller may keep reading other fields
//! or advance past a failing row.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the result reader
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    // =========================================================================
    // Capability Errors
    // =========================================================================
    /// The requested operation (schema reflection, nested reader) is not offered
    #[error("operation not supported: {0}")]
    NotSupported(String),

    // =========================================================================
    // Data Type Errors
    // =========================================================================
    /// Stored or coerced value does not match the requested type
    #[error("invalid cast: expected {expected}, found {actual}")]
    InvalidCast {
        expected: &'static str,
        actual: &'static str,
    },

    /// Text could not be parsed into the type required by the column tag
    #[error("cannot parse {text:?} as {target}")]
    ParseFailure { target: &'static str, text: String },

    // =========================================================================
    // Position Errors
    // =========================================================================
    /// Ordinal, row or result index outside its valid range
    #[error("{what} index {index} out of range (count: {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: i64,
        len: usize,
    },

    /// Column name did not resolve in the current result
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Reader was used after close
    #[error("reader is closed")]
    CursorClosed,
}

impl Error {
    /// Create an unsupported-operation error naming the operation
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Error::NotSupported(operation.into())
    }

    /// Create an out-of-range error for a column ordinal
    pub fn ordinal_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            what: "ordinal",
            index: index as i64,
            len,
        }
    }

    /// Check if this is an unsupported-operation error
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Error::NotSupported(_))
    }

    /// Check if this is an invalid cast
    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, Error::InvalidCast { .. })
    }
}
