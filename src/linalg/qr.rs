//! QR decomposition using Householder reflections
//!
//! Factors an m×n matrix as `A = Q·R` with Q orthogonal and R upper
//! triangular. Each step reflects the current column onto a multiple of
//! the first basis vector with `I - 2vvᵀ`, applied to the trailing block
//! of R and accumulated into Q. The reflection sign is chosen opposite to
//! the leading entry to avoid cancellation.

use crate::error::Result;
use crate::linalg::decompositions::QrDecomposition;
use crate::linalg::helpers::validate_nonempty;
use crate::matrix::Matrix;

/// Full QR decomposition: Q is m×m, R is m×n.
pub fn qr_decompose(a: &Matrix<f64>) -> Result<QrDecomposition> {
    householder_qr(a, false)
}

/// Thin QR decomposition: Q is m×k, R is k×n, with k = min(m, n).
///
/// Cheaper than the full form and sufficient for least-squares solves.
pub fn qr_decompose_thin(a: &Matrix<f64>) -> Result<QrDecomposition> {
    householder_qr(a, true)
}

fn householder_qr(a: &Matrix<f64>, thin: bool) -> Result<QrDecomposition> {
    let (m, n) = validate_nonempty(a)?;
    let k = m.min(n);

    // R starts as a copy of A
    let mut r: Vec<f64> = a.as_slice().to_vec();

    // Q is accumulated at full m×m size even for thin output: each
    // reflector acts on columns col..m of Q, and those trailing columns
    // feed back into the leading k columns of later steps. The thin form
    // keeps the leading k columns only after all reflectors are applied.
    let mut q = vec![0.0_f64; m * m];
    for i in 0..m {
        q[i * m + i] = 1.0;
    }

    for col in 0..k {
        // Column below and including the diagonal: x = R[col.., col]
        let x_len = m - col;
        let mut v: Vec<f64> = (0..x_len).map(|i| r[(col + i) * n + col]).collect();

        let norm_x = v.iter().map(|val| val * val).sum::<f64>().sqrt();
        if norm_x < f64::EPSILON {
            continue;
        }

        // alpha = -sign(x[0]) * ||x||, then v = x - alpha·e1, normalized
        let alpha = if v[0] >= 0.0 { -norm_x } else { norm_x };
        v[0] -= alpha;

        let norm_v = v.iter().map(|val| val * val).sum::<f64>().sqrt();
        if norm_v < f64::EPSILON {
            continue;
        }
        for val in &mut v {
            *val /= norm_v;
        }

        // R[col.., col..] -= 2 v (vᵀ R[col.., col..])
        let mut w = vec![0.0_f64; n - col];
        for (i, &vi) in v.iter().enumerate() {
            for (j, wj) in w.iter_mut().enumerate() {
                *wj += vi * r[(col + i) * n + (col + j)];
            }
        }
        for (i, &vi) in v.iter().enumerate() {
            for (j, &wj) in w.iter().enumerate() {
                r[(col + i) * n + (col + j)] -= 2.0 * vi * wj;
            }
        }

        // Q[:, col..] -= 2 (Q[:, col..] v) vᵀ
        for row in 0..m {
            let mut dot = 0.0_f64;
            for (i, &vi) in v.iter().enumerate() {
                dot += q[row * m + (col + i)] * vi;
            }
            for (i, &vi) in v.iter().enumerate() {
                q[row * m + (col + i)] -= 2.0 * dot * vi;
            }
        }
    }

    let q = if thin {
        let mut q_thin = vec![0.0_f64; m * k];
        for i in 0..m {
            q_thin[i * k..(i + 1) * k].copy_from_slice(&q[i * m..i * m + k]);
        }
        Matrix::from_vec(q_thin, m, k)?
    } else {
        Matrix::from_vec(q, m, m)?
    };

    // For thin QR only the first k rows of R are kept
    let r_rows = if thin { k } else { m };
    let mut r_out = vec![0.0_f64; r_rows * n];
    for i in 0..r_rows {
        // Entries below the diagonal are eliminated up to roundoff; zero
        // them so R is exactly upper triangular.
        for j in i..n {
            r_out[i * n + j] = r[i * n + j];
        }
    }
    let r = Matrix::from_vec(r_out, r_rows, n)?;

    Ok(QrDecomposition { q, r })
}

impl QrDecomposition {
    /// Rebuild `Q @ R` for comparison against the original matrix.
    pub fn reconstruct(&self) -> Result<Matrix<f64>> {
        self.q.matmul(&self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_identity() {
        let eye = Matrix::<f64>::identity(3);
        let qr = qr_decompose(&eye).unwrap();
        let rec = qr.reconstruct().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((rec[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_qr_r_upper_triangular() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        let qr = qr_decompose(&a).unwrap();
        assert_eq!(qr.q.shape(), (3, 3));
        assert_eq!(qr.r.shape(), (3, 2));
        for i in 0..3 {
            for j in 0..2.min(i) {
                assert_eq!(qr.r[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_qr_thin_shapes() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        let qr = qr_decompose_thin(&a).unwrap();
        assert_eq!(qr.q.shape(), (3, 2));
        assert_eq!(qr.r.shape(), (2, 2));
    }

    #[test]
    fn test_qr_rejects_empty() {
        assert!(qr_decompose(&Matrix::<f64>::zeros(0, 2)).is_err());
    }
}
