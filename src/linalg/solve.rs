//! Triangular solves and QR-based least squares

use crate::error::{Error, Result};
use crate::linalg::helpers::{validate_nonempty, validate_square};
use crate::linalg::qr::qr_decompose_thin;
use crate::matrix::Matrix;

/// Back substitution for an upper triangular system `U x = b`.
///
/// Fails with `Singular` if a diagonal entry is zero or negligible
/// relative to the largest diagonal entry.
pub fn solve_triangular_upper(u: &Matrix<f64>, b: &[f64]) -> Result<Vec<f64>> {
    let n = validate_square(u)?;
    if b.len() != n {
        return Err(Error::shape_mismatch(&[n], &[b.len()]));
    }

    let mut max_diag = 0.0_f64;
    for i in 0..n {
        max_diag = max_diag.max(u[(i, i)].abs());
    }
    let tol = max_diag * (n as f64) * f64::EPSILON;

    let mut x = vec![0.0_f64; n];
    for i in (0..n).rev() {
        let diag = u[(i, i)];
        if diag.abs() <= tol {
            return Err(Error::singular(
                "solve_triangular_upper",
                "negligible diagonal entry",
            ));
        }
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += u[(i, j)] * x[j];
        }
        x[i] = (b[i] - sum) / diag;
    }
    Ok(x)
}

/// Least-squares solution of the overdetermined system `A x ≈ b` via thin
/// QR: minimizes `‖A x - b‖₂` by solving `R x = Qᵀ b`.
///
/// Requires `m >= n`; a rank-deficient design matrix surfaces as
/// `Singular` from the triangular solve.
pub fn lstsq(a: &Matrix<f64>, b: &[f64]) -> Result<Vec<f64>> {
    let (m, n) = validate_nonempty(a)?;
    if m < n {
        return Err(Error::invalid_argument(
            "a",
            format!("least squares requires rows >= cols, got {m}x{n}"),
        ));
    }
    if b.len() != m {
        return Err(Error::shape_mismatch(&[m], &[b.len()]));
    }

    // Thin QR: Q is m×n, R is n×n since m >= n
    let qr = qr_decompose_thin(a)?;

    // Qᵀ b
    let mut qtb = vec![0.0_f64; n];
    for (i, qtb_i) in qtb.iter_mut().enumerate() {
        let mut sum = 0.0;
        for j in 0..m {
            sum += qr.q[(j, i)] * b[j];
        }
        *qtb_i = sum;
    }

    solve_triangular_upper(&qr.r, &qtb)
}
