//! Singular Value Decomposition using the One-Sided Jacobi algorithm
//!
//! Factors an m×n matrix as `A = U @ diag(S) @ Vᵀ`. Column pairs of a
//! working copy are repeatedly rotated until they are mutually orthogonal;
//! the column norms are then the singular values and the normalized
//! columns are the left singular vectors. Rotations use the numerically
//! stable LAPACK formula to avoid catastrophic cancellation. Inputs with
//! m < n are handled by factoring the transpose and swapping U and Vᵀ.

use crate::error::Result;
use crate::linalg::decompositions::SvdDecomposition;
use crate::linalg::helpers::validate_nonempty;
use crate::matrix::Matrix;

const MAX_SWEEPS: usize = 30;

/// Jacobi rotation parameters `(c, s)` that zero the off-diagonal element
/// of the 2×2 Gram submatrix `[[a_pp, a_pq], [a_pq, a_qq]]`:
///
/// ```text
/// τ = (a_qq - a_pp) / (2 a_pq)
/// t = sign(τ) / (|τ| + sqrt(1 + τ²))
/// c = 1 / sqrt(1 + t²),  s = t·c
/// ```
fn jacobi_rotation(a_pp: f64, a_qq: f64, a_pq: f64) -> (f64, f64) {
    let denom = 2.0 * a_pq;
    if denom.abs() < 1e-300 {
        return (1.0, 0.0);
    }

    let tau = (a_qq - a_pp) / denom;
    let t = if tau >= 0.0 {
        1.0 / (tau + (1.0 + tau * tau).sqrt())
    } else {
        -1.0 / (-tau + (1.0 + tau * tau).sqrt())
    };

    let c = 1.0 / (1.0 + t * t).sqrt();
    (c, t * c)
}

/// Gram matrix elements for columns p and q:
/// `(B[:,p]·B[:,p], B[:,q]·B[:,q], B[:,p]·B[:,q])`.
fn column_gram(b: &[f64], rows: usize, cols: usize, p: usize, q: usize) -> (f64, f64, f64) {
    let mut a_pp = 0.0;
    let mut a_qq = 0.0;
    let mut a_pq = 0.0;
    for i in 0..rows {
        let bp = b[i * cols + p];
        let bq = b[i * cols + q];
        a_pp += bp * bp;
        a_qq += bq * bq;
        a_pq += bp * bq;
    }
    (a_pp, a_qq, a_pq)
}

/// Apply the rotation to columns p and q:
/// `[col_p', col_q'] = [col_p, col_q] @ [[c, s], [-s, c]]`.
fn rotate_columns(data: &mut [f64], rows: usize, cols: usize, p: usize, q: usize, c: f64, s: f64) {
    for i in 0..rows {
        let val_p = data[i * cols + p];
        let val_q = data[i * cols + q];
        data[i * cols + p] = c * val_p - s * val_q;
        data[i * cols + q] = s * val_p + c * val_q;
    }
}

/// SVD decomposition: `A = U @ diag(S) @ Vᵀ` with singular values sorted
/// in descending order.
pub fn svd_decompose(a: &Matrix<f64>) -> Result<SvdDecomposition> {
    let (m, n) = validate_nonempty(a)?;
    let k = m.min(n);

    // Work on the tall orientation; swap U and Vᵀ at the end if needed
    let transposed = m < n;
    let work = if transposed { a.transpose() } else { a.clone() };
    let (rows, cols) = work.shape();

    let mut b: Vec<f64> = work.as_slice().to_vec();
    let mut v: Vec<f64> = Matrix::<f64>::identity(cols).as_slice().to_vec();

    let tol = (cols as f64) * f64::EPSILON;

    for _sweep in 0..MAX_SWEEPS {
        let mut off_diag_sum = 0.0_f64;

        for p in 0..cols {
            for q in (p + 1)..cols {
                let (a_pp, a_qq, a_pq) = column_gram(&b, rows, cols, p, q);
                off_diag_sum += a_pq * a_pq;

                if a_pq.abs() < tol * (a_pp * a_qq).sqrt() {
                    continue;
                }

                let (c, s) = jacobi_rotation(a_pp, a_qq, a_pq);
                rotate_columns(&mut b, rows, cols, p, q, c, s);
                rotate_columns(&mut v, cols, cols, p, q, c, s);
            }
        }

        if off_diag_sum.sqrt() < tol {
            break;
        }
    }

    // Column norms are the singular values; normalized columns form U
    let mut norms = vec![0.0_f64; cols];
    for (j, norm) in norms.iter_mut().enumerate() {
        let mut norm_sq = 0.0;
        for i in 0..rows {
            let val = b[i * cols + j];
            norm_sq += val * val;
        }
        *norm = norm_sq.sqrt();
        if *norm > f64::EPSILON {
            for i in 0..rows {
                b[i * cols + j] /= *norm;
            }
        } else {
            for i in 0..rows {
                b[i * cols + j] = 0.0;
            }
        }
    }

    // Sort singular values descending, reorder U and V columns to match
    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by(|&i, &j| {
        norms[j]
            .partial_cmp(&norms[i])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let s: Vec<f64> = order.iter().take(k).map(|&idx| norms[idx]).collect();

    // U columns in sorted order, keeping the leading k
    let mut u_sorted = vec![0.0_f64; rows * k];
    for (new_idx, &old_idx) in order.iter().take(k).enumerate() {
        for i in 0..rows {
            u_sorted[i * k + new_idx] = b[i * cols + old_idx];
        }
    }

    // Vᵀ rows in sorted order: Vᵀ[i, j] = V[j, order[i]]
    let mut vt_sorted = vec![0.0_f64; k * cols];
    for (new_idx, &old_idx) in order.iter().take(k).enumerate() {
        for j in 0..cols {
            vt_sorted[new_idx * cols + j] = v[j * cols + old_idx];
        }
    }

    if transposed {
        // A = (U' S V'ᵀ)ᵀ = V' S U'ᵀ, so U ← V' and Vᵀ ← U'ᵀ
        let mut u_final = vec![0.0_f64; m * k];
        for i in 0..k {
            for j in 0..m {
                u_final[j * k + i] = vt_sorted[i * cols + j];
            }
        }
        let mut vt_final = vec![0.0_f64; k * n];
        for i in 0..rows {
            for j in 0..k {
                vt_final[j * n + i] = u_sorted[i * k + j];
            }
        }
        Ok(SvdDecomposition {
            u: Matrix::from_vec(u_final, m, k)?,
            s,
            vt: Matrix::from_vec(vt_final, k, n)?,
        })
    } else {
        Ok(SvdDecomposition {
            u: Matrix::from_vec(u_sorted, m, k)?,
            s,
            vt: Matrix::from_vec(vt_sorted, k, n)?,
        })
    }
}

impl SvdDecomposition {
    /// Rebuild `U @ diag(S) @ Vᵀ` for comparison against the original.
    pub fn reconstruct(&self) -> Result<Matrix<f64>> {
        let k = self.s.len();
        let mut scaled = self.vt.clone();
        for i in 0..k {
            for j in 0..scaled.cols() {
                scaled[(i, j)] = self.s[i] * self.vt[(i, j)];
            }
        }
        self.u.matmul(&scaled)
    }
}
