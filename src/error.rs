//! Error types for numla

use thiserror::Error;

/// Result type alias using numla's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numla operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape as `[rows, cols]`
        expected: Vec<usize>,
        /// Actual shape as `[rows, cols]`
        got: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Matrix is not positive definite
    ///
    /// Raised by the Cholesky factorization when a diagonal residual is
    /// negative or has a non-real component beyond tolerance. The algorithm
    /// never takes the square root of such a residual, so a factorization
    /// result can never contain NaN.
    #[error("Matrix is not positive definite at row {row}: {reason}")]
    NotPositiveDefinite {
        /// Row index where the factorization broke down
        row: usize,
        /// What went wrong with the diagonal residual
        reason: &'static str,
    },

    /// Matrix is singular (or numerically so) for the requested operation
    #[error("Singular matrix in '{op}': {reason}")]
    Singular {
        /// The operation name
        op: &'static str,
        /// Why the system has no stable solution
        reason: &'static str,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a not-positive-definite error
    pub fn not_positive_definite(row: usize, reason: &'static str) -> Self {
        Self::NotPositiveDefinite { row, reason }
    }

    /// Create a singular matrix error
    pub fn singular(op: &'static str, reason: &'static str) -> Self {
        Self::Singular { op, reason }
    }
}
