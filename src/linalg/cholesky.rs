//! Hermitian Cholesky decomposition (Cholesky–Banachiewicz algorithm)
//!
//! Decomposes a Hermitian positive-definite matrix `A` into `A = L Lᴴ`
//! where `L` is lower triangular with real, non-negative diagonal entries
//! and `Lᴴ` is the conjugate transpose of `L`.
//!
//! # Algorithm
//!
//! Row by row, column-ascending; each entry depends only on entries in
//! earlier columns of the same or lower rows, so a single forward pass
//! suffices and no value is ever revisited:
//!
//! ```text
//! L(j, j) = sqrt(A(j, j) - Σ_{t<j} L(j, t)·conj(L(j, t)))
//! L(i, j) = (A(i, j) - Σ_{t<j} L(i, t)·conj(L(j, t))) / L(j, j)   for i > j
//! ```
//!
//! The divisor `L(j, j)` is always real, so the off-diagonal update is a
//! complex-by-real division. O(n³) multiply-adds, O(n²) storage, no
//! pivoting (pivoting is unnecessary for a genuinely positive-definite
//! input).
//!
//! # Preconditions
//!
//! The input must be Hermitian: `A(i, j) == conj(A(j, i))`. This is a
//! documented precondition, not enforced here; callers can check it with
//! [`Matrix::is_hermitian`] when it matters. Positive-definiteness *is*
//! detected: a diagonal residual that is negative or non-real beyond
//! [`RESIDUAL_TOLERANCE`] fails with
//! [`Error::NotPositiveDefinite`](crate::error::Error::NotPositiveDefinite)
//! instead of taking the square root of a bad value, so the result can
//! never contain NaN.

use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::linalg::decompositions::CholeskyDecomposition;
use crate::linalg::helpers::validate_square;
use crate::matrix::Matrix;

/// Absolute tolerance for the diagonal residual checks, scaled by the
/// magnitude of the corresponding input diagonal entry (floored at 1).
pub const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Compute the Cholesky decomposition of a Hermitian positive-definite
/// matrix: `A = L Lᴴ`.
///
/// Fails with `ShapeMismatch` if `A` is not square, `InvalidArgument` if
/// it is empty, and `NotPositiveDefinite` if a diagonal residual is
/// negative or non-real beyond tolerance, or if a zero diagonal entry
/// would have to divide a later row.
///
/// A diagonal residual of exactly zero is the positive-semidefinite
/// boundary: it produces a zero diagonal entry rather than an error, so a
/// singular-but-consistent input (every row past the zero pivot already
/// resolved) still factors exactly.
///
/// ```
/// use numla::dtype::Complex64;
/// use numla::linalg::cholesky_decompose;
/// use numla::matrix::Matrix;
///
/// let a = Matrix::from_vec(
///     vec![
///         Complex64::new(4.0, 0.0),
///         Complex64::new(4.0, 10.0),
///         Complex64::new(4.0, -10.0),
///         Complex64::new(29.0, 0.0),
///     ],
///     2,
///     2,
/// )
/// .unwrap();
/// let chol = cholesky_decompose(&a).unwrap();
/// assert_eq!(chol.l[(0, 0)], Complex64::new(2.0, 0.0));
/// assert_eq!(chol.l[(1, 0)], Complex64::new(2.0, -5.0));
/// ```
pub fn cholesky_decompose<T: Scalar>(a: &Matrix<T>) -> Result<CholeskyDecomposition<T>> {
    let n = validate_square(a)?;
    let mut l: Matrix<T> = Matrix::zeros(n, n);

    for i in 0..n {
        for j in 0..=i {
            let mut sum = T::zero();
            for t in 0..j {
                sum = sum + l[(i, t)] * l[(j, t)].conj();
            }
            let head = a[(i, j)] - sum;

            if i == j {
                // The residual of a Hermitian PD matrix is real and
                // positive; anything else means the precondition failed.
                let tol = RESIDUAL_TOLERANCE * a[(i, i)].modulus().max(1.0);
                if head.im().abs() > tol {
                    return Err(Error::not_positive_definite(
                        i,
                        "diagonal residual has a non-real component",
                    ));
                }
                let residual = head.re();
                if residual < -tol {
                    return Err(Error::not_positive_definite(
                        i,
                        "diagonal residual is negative",
                    ));
                }
                l[(i, i)] = T::from_re(residual.max(0.0).sqrt());
            } else {
                let diag = l[(j, j)].re();
                if diag <= 0.0 {
                    return Err(Error::not_positive_definite(
                        i,
                        "division by a zero diagonal entry",
                    ));
                }
                l[(i, j)] = head.scale(1.0 / diag);
            }
        }
    }

    Ok(CholeskyDecomposition { l })
}

impl<T: Scalar> CholeskyDecomposition<T> {
    /// Rebuild `L @ Lᴴ` for comparison against the original matrix.
    pub fn reconstruct(&self) -> Matrix<T> {
        let lh = self.l.conjugate_transpose();
        // L and Lᴴ always have compatible shapes
        self.l.matmul(&lh).expect("L and Lᴴ are square")
    }
}
