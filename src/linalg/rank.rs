//! Matrix rank via two independent estimators
//!
//! A caller that needs confidence in a rank value can compute it both
//! ways and cross-check:
//!
//! - [`matrix_rank_lu`]: the number of non-negligible pivots of a fully
//!   pivoted LU factorization.
//! - [`matrix_rank_svd`]: the number of singular values above an absolute
//!   tolerance (default [`DEFAULT_SVD_RANK_TOLERANCE`]).

use crate::error::Result;
use crate::linalg::lu::lu_decompose_full_pivot;
use crate::linalg::svd::svd_decompose;
use crate::matrix::Matrix;

/// Absolute singular-value cutoff used when [`matrix_rank_svd`] is called
/// without an explicit tolerance.
pub const DEFAULT_SVD_RANK_TOLERANCE: f64 = 1e-10;

/// Rank from a fully pivoted LU factorization: the count of pivots above
/// the zero-pivot threshold.
pub fn matrix_rank_lu(a: &Matrix<f64>) -> Result<usize> {
    Ok(lu_decompose_full_pivot(a)?.rank())
}

/// Rank from the SVD: the count of singular values strictly greater than
/// `tol` (default [`DEFAULT_SVD_RANK_TOLERANCE`]). Adjust the tolerance to
/// the precision the application needs.
pub fn matrix_rank_svd(a: &Matrix<f64>, tol: Option<f64>) -> Result<usize> {
    let tol = tol.unwrap_or(DEFAULT_SVD_RANK_TOLERANCE);
    let svd = svd_decompose(a)?;
    Ok(svd.s.iter().filter(|&&sigma| sigma > tol).count())
}
