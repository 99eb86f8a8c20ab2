//! Dense row-major matrix storage
//!
//! [`Matrix`] is the single storage type used by every algorithm in this
//! crate: a flat `Vec<T>` in row-major order with explicit row/column
//! counts. Inputs to decompositions are taken by shared reference and never
//! mutated; results are freshly allocated.

mod display;

use crate::dtype::Scalar;
use crate::error::{Error, Result};
use std::ops::{Index, IndexMut};

/// Dense row-major matrix over a [`Scalar`] element type.
///
/// Entry `(i, j)` lives at flat index `i * cols + j`. Indexing with a
/// `(row, col)` tuple panics on out-of-bounds access, matching slice
/// indexing semantics; all shape errors between whole matrices are
/// reported through [`Result`] instead.
///
/// ```
/// use numla::matrix::Matrix;
///
/// let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.transpose()[(0, 1)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from a row-major data vector.
    ///
    /// Fails with [`Error::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(&[rows, cols], &[data.len()]));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create an n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major element slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Transpose: `B[j, i] = A[i, j]`.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Conjugate (Hermitian) transpose: `B[j, i] = conj(A[i, j])`.
    pub fn conjugate_transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j].conj();
            }
        }
        out
    }

    /// Matrix product `A @ B`.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the inner dimensions differ.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::shape_mismatch(
                &[self.cols, other.cols],
                &[other.rows, other.cols],
            ));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a_ik = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    let prod = a_ik * other.data[k * other.cols + j];
                    out.data[i * other.cols + j] = out.data[i * other.cols + j] + prod;
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `A @ v`.
    pub fn matvec(&self, v: &[T]) -> Result<Vec<T>> {
        if v.len() != self.cols {
            return Err(Error::shape_mismatch(&[self.cols], &[v.len()]));
        }
        let mut out = vec![T::zero(); self.rows];
        for i in 0..self.rows {
            let mut sum = T::zero();
            for j in 0..self.cols {
                sum = sum + self.data[i * self.cols + j] * v[j];
            }
            out[i] = sum;
        }
        Ok(out)
    }

    /// Element-wise difference `A - B`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(
                &[self.rows, self.cols],
                &[other.rows, other.cols],
            ));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Frobenius norm: `sqrt(Σ |A[i,j]|²)`.
    pub fn frobenius_norm(&self) -> f64 {
        self.data
            .iter()
            .map(|x| {
                let m = x.modulus();
                m * m
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Largest element modulus.
    pub fn max_modulus(&self) -> f64 {
        self.data.iter().map(Scalar::modulus).fold(0.0, f64::max)
    }

    /// Check the Hermitian property `A[i, j] == conj(A[j, i])` within an
    /// absolute tolerance.
    ///
    /// The Cholesky factorization documents this as a precondition without
    /// enforcing it; callers that care can validate up front.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..=i {
                let diff = self.data[i * self.cols + j] - self.data[j * self.cols + i].conj();
                if diff.modulus() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}
