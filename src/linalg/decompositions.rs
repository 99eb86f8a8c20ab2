//! Decomposition result types for linear algebra operations
//!
//! This module contains the result structures returned by matrix
//! decompositions: Cholesky, fully pivoted LU, QR, and SVD. Accessor and
//! reconstruction methods live next to the algorithm that produces each
//! result.

use crate::matrix::Matrix;

/// Hermitian Cholesky decomposition result: A = L·Lᴴ
///
/// Only valid for Hermitian positive-definite matrices. `L` is lower
/// triangular; its diagonal entries are real and non-negative, and every
/// entry above the diagonal is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyDecomposition<T> {
    /// Lower triangular factor L such that A = L @ Lᴴ
    pub l: Matrix<T>,
}

/// Fully pivoted LU decomposition result: P·A·Q = L·U
///
/// L is lower triangular with unit diagonal, U is upper triangular.
/// P and Q are permutation matrices, stored as index vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FullPivLuDecomposition {
    /// Lower triangular factor L (strict lower part, unit diagonal implied)
    /// and upper triangular factor U (upper part including diagonal),
    /// stored together in a single m×n matrix for memory efficiency.
    pub lu: Matrix<f64>,

    /// Row permutation: row `i` of P·A·Q is row `row_perm[i]` of A
    pub row_perm: Vec<usize>,

    /// Column permutation: column `j` of P·A·Q is column `col_perm[j]` of A
    pub col_perm: Vec<usize>,

    /// Number of pivots above the zero-pivot threshold; equals the
    /// numerical rank of A
    pub rank: usize,
}

/// QR decomposition result: A = Q·R
///
/// Q has orthonormal columns (QᵀQ = I), R is upper triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    /// Orthogonal matrix Q, m×m (full) or m×k with k = min(m, n) (thin)
    pub q: Matrix<f64>,

    /// Upper triangular matrix R, m×n (full) or k×n (thin)
    pub r: Matrix<f64>,
}

/// Singular Value Decomposition result: A = U @ diag(S) @ Vᵀ
#[derive(Debug, Clone, PartialEq)]
pub struct SvdDecomposition {
    /// Left singular vectors U, m×k where k = min(m, n)
    pub u: Matrix<f64>,

    /// Singular values, length k, sorted in descending order
    pub s: Vec<f64>,

    /// Right singular vectors Vᵀ, k×n
    pub vt: Matrix<f64>,
}
