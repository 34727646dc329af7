//! Error types for densegrid operations

use thiserror::Error;

/// Result type for densegrid operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur during matrix operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    #[error("Dimension mismatch in {operation}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Operation that rejected the operands
        operation: &'static str,
        /// Shape of the left operand (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand (rows, cols)
        right: (usize, usize),
    },

    /// Accessor index (or supplied sequence length) outside the valid range
    #[error("Index out of range: {index} (bound {bound})")]
    IndexOutOfRange {
        /// Offending index or length
        index: usize,
        /// Exclusive upper bound, or the required length
        bound: usize,
    },

    /// Matrix has no inverse
    #[error("Matrix is singular")]
    SingularMatrix,

    /// Construction from empty input or with a zero dimension
    #[error("Empty input")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_error() {
        let err = MatrixError::DimensionMismatch {
            operation: "multiply",
            left: (2, 3),
            right: (4, 2),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in multiply: 2x3 vs 4x2"
        );
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = MatrixError::IndexOutOfRange { index: 5, bound: 3 };
        assert_eq!(err.to_string(), "Index out of range: 5 (bound 3)");
    }

    #[test]
    fn test_singular_matrix_error() {
        assert_eq!(MatrixError::SingularMatrix.to_string(), "Matrix is singular");
    }

    #[test]
    fn test_empty_input_error() {
        assert_eq!(MatrixError::EmptyInput.to_string(), "Empty input");
    }

    #[test]
    fn test_error_equality() {
        let err1 = MatrixError::IndexOutOfRange { index: 1, bound: 1 };
        let err2 = MatrixError::IndexOutOfRange { index: 1, bound: 1 };
        assert_eq!(err1, err2);
        assert_ne!(err1, MatrixError::EmptyInput);
    }
}
