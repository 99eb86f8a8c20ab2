//! # numla
//!
//! **Classical dense numerical linear algebra, implemented from first
//! principles in pure Rust.**
//!
//! numla provides the decompositions behind everyday numerical work —
//! Cholesky, LU, QR, SVD — together with matrix rank estimation and
//! polynomial least-squares fitting, all as pure functions over an
//! immutable [`matrix::Matrix`] type.
//!
//! ## Features
//!
//! - **Hermitian Cholesky**: `A = L·Lᴴ` for complex (or real) Hermitian
//!   positive-definite matrices, with explicit positive-definiteness
//!   detection instead of silent NaN
//! - **Fully pivoted LU**: `P·A·Q = L·U` with reconstruction and a
//!   pivot-count rank estimate
//! - **Householder QR**: full and thin variants, the backbone of the
//!   least-squares solver
//! - **One-sided Jacobi SVD**: singular values for the second,
//!   independent rank estimate
//! - **Polynomial fitting**: Vandermonde + QR least squares, Horner
//!   evaluation
//!
//! ## Quick Start
//!
//! ```
//! use numla::prelude::*;
//!
//! let a = Matrix::from_vec(vec![4.0, 2.0, 2.0, 3.0], 2, 2)?;
//! let chol = cholesky_decompose(&a)?;
//! let diff = chol.reconstruct().sub(&a)?;
//! assert!(diff.frobenius_norm() < 1e-12);
//! # Ok::<(), numla::error::Error>(())
//! ```
//!
//! ## Design
//!
//! - Inputs are never mutated; every call allocates its own result.
//! - No shared or global state: calls on independent matrices are safe
//!   from independent threads. Parallel decomposition of a single matrix
//!   is out of scope.
//! - Errors are values ([`error::Error`]); library code never panics on
//!   bad numerical input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod polynomial;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Complex64, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{
        cholesky_decompose, lstsq, lu_decompose_full_pivot, matrix_rank_lu, matrix_rank_svd,
        qr_decompose, qr_decompose_thin, svd_decompose, CholeskyDecomposition,
        FullPivLuDecomposition, QrDecomposition, SvdDecomposition,
    };
    pub use crate::matrix::Matrix;
    pub use crate::polynomial::{polyfit, polyval};
}
