//! Error types for vector and matrix operations.

use thiserror::Error;

/// Errors that can occur during linear algebra operations.
///
/// Every operation in this crate is a pure computation: an error means the
/// inputs were rejected and nothing was produced, never that partial state
/// must be rolled back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand vector lengths differ where equality is required.
    #[error("vector lengths must be equal: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// Operand shape does not meet a fixed dimension requirement.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Required dimension
        expected: usize,
        /// Dimension found
        actual: usize,
    },

    /// An operand that must be present is absent.
    ///
    /// Distinct from [`EmptyInput`](LinalgError::EmptyInput): an absent
    /// vector is `None`, a zero-length slice is a valid (empty) vector.
    #[error("operand vector is absent")]
    NullInput,

    /// An operand has zero length where at least one element is required.
    #[error("vector cannot be empty")]
    EmptyInput,

    /// A requested dimension is below the minimum allowed.
    #[error("matrix cannot have size < 1, got {size}")]
    InvalidSize {
        /// Size that was requested
        size: usize,
    },

    /// A matrix's rows have inconsistent lengths.
    #[error("matrix must be rectangular: row {row} has length {actual}, expected {expected}")]
    NotRectangular {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

/// Result type for linear algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = LinalgError::LengthMismatch { left: 5, right: 4 };
        assert_eq!(err.to_string(), "vector lengths must be equal: 5 vs 4");

        let err = LinalgError::NotRectangular {
            row: 2,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("length 3"));
    }
}
