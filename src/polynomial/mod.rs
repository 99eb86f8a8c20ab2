//! Polynomial least-squares fitting and evaluation
//!
//! # Coefficient Convention
//!
//! Polynomials are represented as slices of coefficients in ascending
//! order (`coeffs[0]` is the constant term), matching NumPy's ordering:
//! `p(x) = c₀ + c₁x + c₂x² + ... + cₙxⁿ`.
//!
//! # Fitting
//!
//! [`polyfit`] sets up a Vandermonde design matrix (column `i` holds the
//! i-th powers of the sample abscissas) and solves the overdetermined
//! system with QR-based least squares. For `order < len - 1` the fit is a
//! least-squares approximation, not an interpolation; the residual at the
//! sample points is minimized, not zero.

use crate::error::{Error, Result};
use crate::linalg::solve::lstsq;
use crate::matrix::Matrix;

/// Fit a polynomial of the given order through the sample points,
/// returning `order + 1` coefficients in ascending order.
///
/// Fails with `ShapeMismatch` if the sample slices differ in length,
/// `InvalidArgument` if `order` is outside `1..=len-1`, and `Singular`
/// if the design matrix is rank deficient (for example, repeated
/// abscissas with an order that demands them distinct).
///
/// ```
/// use numla::polynomial::{polyfit, polyval};
///
/// // y = 1 + 2x fits a line exactly
/// let coeffs = polyfit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], 1).unwrap();
/// assert!((coeffs[0] - 1.0).abs() < 1e-10);
/// assert!((coeffs[1] - 2.0).abs() < 1e-10);
/// assert!((polyval(&coeffs, 3.0) - 7.0).abs() < 1e-10);
/// ```
pub fn polyfit(xvals: &[f64], yvals: &[f64], order: usize) -> Result<Vec<f64>> {
    if xvals.len() != yvals.len() {
        return Err(Error::shape_mismatch(&[xvals.len()], &[yvals.len()]));
    }
    let count = xvals.len();
    if order < 1 || order + 1 > count {
        return Err(Error::invalid_argument(
            "order",
            format!("order must be in 1..={} for {count} samples, got {order}", count - 1),
        ));
    }

    // Vandermonde design matrix, columns built by incremental products:
    // V(j, 0) = 1, V(j, i+1) = V(j, i) * x_j
    let mut design = Matrix::zeros(count, order + 1);
    for j in 0..count {
        design[(j, 0)] = 1.0;
        for i in 0..order {
            design[(j, i + 1)] = design[(j, i)] * xvals[j];
        }
    }

    lstsq(&design, yvals)
}

/// Evaluate a polynomial at `x` using Horner's method.
///
/// Equivalent to `Σ coeffs[i] · xⁱ` with n multiplications and n
/// additions. An empty coefficient slice evaluates to zero.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
