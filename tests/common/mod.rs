//! Common test utilities
#![allow(dead_code)]

use numla::dtype::Complex64;
use numla::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two real matrices are close element-wise within an absolute
/// tolerance
pub fn assert_matrix_allclose(a: &Matrix<f64>, b: &Matrix<f64>, atol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    let diff = a.sub(b).unwrap();
    let err = diff.max_modulus();
    assert!(
        err <= atol,
        "{}: max element error {} exceeds tolerance {}",
        msg,
        err,
        atol
    );
}

/// Random m×n matrix with entries in [-1, 1]
pub fn random_matrix(m: usize, n: usize, rng: &mut StdRng) -> Matrix<f64> {
    let data: Vec<f64> = (0..m * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(data, m, n).unwrap()
}

/// Random symmetric positive-definite n×n matrix: B·Bᵀ + n·I
pub fn random_spd(n: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = random_matrix(n, n, &mut rng);
    let mut a = b.matmul(&b.transpose()).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

/// Random Hermitian positive-definite n×n matrix: B·Bᴴ + n·I
pub fn random_hermitian_pd(n: usize, seed: u64) -> Matrix<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<Complex64> = (0..n * n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let b = Matrix::from_vec(data, n, n).unwrap();
    let mut a = b.matmul(&b.conjugate_transpose()).unwrap();
    for i in 0..n {
        a[(i, i)] += Complex64::new(n as f64, 0.0);
    }
    a
}
