//! Error type shared by all matrix operations
//!
//! Every failure in this crate is terminal for the operation that raised it:
//! there is no retryable/permanent distinction. Shape violations are
//! programmer errors surfaced as values rather than panics; singularity is a
//! data error detected during factorization.

use thiserror::Error;

/// Errors that can occur during dense matrix operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A square matrix was required (identity, trace, factorization)
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operand or destination dimensions do not match the operation
    #[error("matrix dimensions mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// The matrix is singular: a zero row during LU scaling, a zero pivot,
    /// or an exhausted Gauss-Jordan pivot search.
    ///
    /// The operand matrices are left in an unspecified, partially-modified
    /// state and must be discarded by the caller.
    #[error("matrix is singular")]
    SingularMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = MatrixError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix must be square, got 2x3");

        let e = MatrixError::ShapeMismatch {
            expected: (2, 2),
            got: (3, 2),
        };
        assert_eq!(
            e.to_string(),
            "matrix dimensions mismatch: expected (2, 2), got (3, 2)"
        );

        assert_eq!(MatrixError::SingularMatrix.to_string(), "matrix is singular");
    }
}
