//! LU decomposition with full pivoting
//!
//! Factors an m×n matrix as `P·A·Q = L·U` where `L` is lower triangular
//! with unit diagonal, `U` is upper triangular, and `P`, `Q` are row and
//! column permutations chosen so that every elimination step pivots on the
//! largest remaining entry. Full pivoting makes the pivot sequence a
//! reliable rank indicator: the numerical rank of `A` is the number of
//! pivots above the zero-pivot threshold.

use crate::error::Result;
use crate::linalg::decompositions::FullPivLuDecomposition;
use crate::linalg::helpers::validate_nonempty;
use crate::matrix::Matrix;

/// LU decomposition with full pivoting.
///
/// Never fails on rank-deficient input; elimination simply stops once the
/// trailing submatrix is numerically zero and the completed step count
/// becomes the rank. Pivots are compared against
/// `max_entry · max(m, n) · ε` (the first pivot is the largest entry of
/// the whole matrix, so it fixes the threshold for the rest).
pub fn lu_decompose_full_pivot(a: &Matrix<f64>) -> Result<FullPivLuDecomposition> {
    let (m, n) = validate_nonempty(a)?;
    let k = m.min(n);

    // Working copy, eliminated in place; L multipliers land in the strict
    // lower part and U in the upper part.
    let mut w: Vec<f64> = a.as_slice().to_vec();
    let mut row_perm: Vec<usize> = (0..m).collect();
    let mut col_perm: Vec<usize> = (0..n).collect();

    let mut rank = k;
    let mut threshold = 0.0_f64;

    for step in 0..k {
        // Largest-modulus entry of the trailing submatrix
        let mut pivot_row = step;
        let mut pivot_col = step;
        let mut max_val = 0.0_f64;
        for i in step..m {
            for j in step..n {
                let val = w[i * n + j].abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = i;
                    pivot_col = j;
                }
            }
        }

        if step == 0 {
            threshold = max_val * (m.max(n) as f64) * f64::EPSILON;
        }
        if max_val <= threshold {
            rank = step;
            break;
        }

        if pivot_row != step {
            for j in 0..n {
                w.swap(step * n + j, pivot_row * n + j);
            }
            row_perm.swap(step, pivot_row);
        }
        if pivot_col != step {
            for i in 0..m {
                w.swap(i * n + step, i * n + pivot_col);
            }
            col_perm.swap(step, pivot_col);
        }

        // Eliminate below the pivot
        let pivot = w[step * n + step];
        for i in (step + 1)..m {
            let factor = w[i * n + step] / pivot;
            w[i * n + step] = factor;
            for j in (step + 1)..n {
                w[i * n + j] -= factor * w[step * n + j];
            }
        }
    }

    let lu = Matrix::from_vec(w, m, n)?;
    Ok(FullPivLuDecomposition {
        lu,
        row_perm,
        col_perm,
        rank,
    })
}

impl FullPivLuDecomposition {
    /// Numerical rank: the number of non-zero pivots.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Extract the unit-lower-triangular factor L, m×k with k = min(m, n).
    pub fn l(&self) -> Matrix<f64> {
        let (m, n) = self.lu.shape();
        let k = m.min(n);
        let mut l = Matrix::zeros(m, k);
        for i in 0..m {
            for j in 0..k.min(i) {
                l[(i, j)] = self.lu[(i, j)];
            }
            if i < k {
                l[(i, i)] = 1.0;
            }
        }
        l
    }

    /// Extract the upper triangular factor U, k×n with k = min(m, n).
    pub fn u(&self) -> Matrix<f64> {
        let (m, n) = self.lu.shape();
        let k = m.min(n);
        let mut u = Matrix::zeros(k, n);
        for i in 0..k {
            for j in i..n {
                u[(i, j)] = self.lu[(i, j)];
            }
        }
        u
    }

    /// Rebuild `A = Pᵀ·L·U·Qᵀ` by undoing both permutations.
    pub fn reconstruct(&self) -> Result<Matrix<f64>> {
        let (m, n) = self.lu.shape();
        let prod = self.l().matmul(&self.u())?;
        let mut out = Matrix::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                out[(self.row_perm[i], self.col_perm[j])] = prod[(i, j)];
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lu_pivot_is_global_max() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 40.0], 2, 2).unwrap();
        let lu = lu_decompose_full_pivot(&a).unwrap();
        // 40 sits at (1, 1); both permutations must move it to the front
        assert_eq!(lu.row_perm[0], 1);
        assert_eq!(lu.col_perm[0], 1);
        assert!((lu.lu[(0, 0)] - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_lu_zero_matrix_rank_zero() {
        let a = Matrix::<f64>::zeros(3, 3);
        let lu = lu_decompose_full_pivot(&a).unwrap();
        assert_eq!(lu.rank(), 0);
    }

    #[test]
    fn test_lu_rejects_empty() {
        let a = Matrix::<f64>::zeros(0, 3);
        assert!(lu_decompose_full_pivot(&a).is_err());
    }
}
