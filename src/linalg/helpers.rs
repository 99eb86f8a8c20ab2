//! Validation helpers for linear algebra operations

use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate that a matrix is square with at least one row, returning `n`.
pub fn validate_square<T: Scalar>(a: &Matrix<T>) -> Result<usize> {
    let (m, n) = a.shape();
    if m != n {
        return Err(Error::shape_mismatch(&[m, m], &[m, n]));
    }
    if n == 0 {
        return Err(Error::invalid_argument(
            "a",
            "matrix must have at least one row",
        ));
    }
    Ok(n)
}

/// Validate that a matrix has at least one row and one column,
/// returning `(rows, cols)`.
pub fn validate_nonempty<T: Scalar>(a: &Matrix<T>) -> Result<(usize, usize)> {
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return Err(Error::invalid_argument(
            "a",
            format!("matrix dimensions must be non-zero, got {m}x{n}"),
        ));
    }
    Ok((m, n))
}
