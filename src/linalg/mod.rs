//! Dense matrix decompositions and rank estimation
//!
//! Every algorithm here is a pure function over an immutable input matrix:
//! it either returns a freshly allocated decomposition result or an error,
//! and never mutates its argument. Nothing is cached between calls, so
//! independent matrices can be processed from independent threads freely.
//!
//! # Algorithms
//!
//! - [`cholesky_decompose`] — Hermitian Cholesky `A = L·Lᴴ`
//!   (Cholesky–Banachiewicz, implemented from first principles)
//! - [`lu_decompose_full_pivot`] — fully pivoted LU `P·A·Q = L·U`
//! - [`qr_decompose`] / [`qr_decompose_thin`] — Householder QR `A = Q·R`
//! - [`svd_decompose`] — one-sided Jacobi SVD `A = U·S·Vᵀ`
//! - [`matrix_rank_lu`] / [`matrix_rank_svd`] — two independent rank
//!   estimators for cross-checking
//! - [`lstsq`] / [`solve_triangular_upper`] — QR-based least squares and
//!   the triangular solve behind it
//!
//! # Module structure
//!
//! - `decompositions`: result types (CholeskyDecomposition, ...)
//! - `helpers`: validation utilities
//! - one module per algorithm family

pub mod cholesky;
pub mod decompositions;
pub mod helpers;
pub mod lu;
pub mod qr;
pub mod rank;
pub mod solve;
pub mod svd;

// Re-export all public types for convenient access
pub use cholesky::cholesky_decompose;
pub use decompositions::*;
pub use helpers::*;
pub use lu::lu_decompose_full_pivot;
pub use qr::{qr_decompose, qr_decompose_thin};
pub use rank::{matrix_rank_lu, matrix_rank_svd, DEFAULT_SVD_RANK_TOLERANCE};
pub use solve::{lstsq, solve_triangular_upper};
pub use svd::svd_decompose;
