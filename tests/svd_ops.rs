//! Integration tests for the one-sided Jacobi SVD

mod common;

use common::{assert_allclose_f64, assert_matrix_allclose, random_matrix};
use numla::linalg::svd_decompose;
use numla::matrix::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_orthonormal_columns(q: &Matrix<f64>, atol: f64) {
    let gram = q.transpose().matmul(q).unwrap();
    let eye = Matrix::<f64>::identity(q.cols());
    assert_matrix_allclose(&gram, &eye, atol, "orthonormality");
}

#[test]
fn test_svd_known_singular_values() {
    // diag(3, -2): singular values are the absolute eigenvalues
    let a = Matrix::from_vec(vec![3.0, 0.0, 0.0, -2.0], 2, 2).unwrap();
    let svd = svd_decompose(&a).unwrap();
    assert_allclose_f64(&svd.s, &[3.0, 2.0], 1e-10, 1e-10, "singular values");
    assert_matrix_allclose(&svd.reconstruct().unwrap(), &a, 1e-10, "rebuild");
}

#[test]
fn test_svd_rank_one() {
    // [[1,2],[2,4]] = [1,2]ᵀ·[1,2]; σ₁ equals the Frobenius norm, σ₂ = 0
    let a = Matrix::from_vec(vec![1.0, 2.0, 2.0, 4.0], 2, 2).unwrap();
    let svd = svd_decompose(&a).unwrap();
    assert!((svd.s[0] - 5.0).abs() < 1e-10);
    assert!(svd.s[1].abs() < 1e-10);
}

#[test]
fn test_svd_reconstruction_random() {
    let mut rng = StdRng::seed_from_u64(271828);
    for &(m, n) in &[(1, 1), (4, 4), (6, 3), (3, 6), (8, 5), (2, 9)] {
        let a = random_matrix(m, n, &mut rng);
        let svd = svd_decompose(&a).unwrap();

        let k = m.min(n);
        assert_eq!(svd.u.shape(), (m, k));
        assert_eq!(svd.s.len(), k);
        assert_eq!(svd.vt.shape(), (k, n));

        assert_matrix_allclose(&svd.reconstruct().unwrap(), &a, 1e-8, "U·S·Vᵀ vs A");
    }
}

#[test]
fn test_svd_factors_orthonormal() {
    let mut rng = StdRng::seed_from_u64(161803);
    let a = random_matrix(7, 4, &mut rng);
    let svd = svd_decompose(&a).unwrap();
    assert_orthonormal_columns(&svd.u, 1e-9);
    assert_orthonormal_columns(&svd.vt.transpose(), 1e-9);
}

#[test]
fn test_svd_values_sorted_non_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(6, 6, &mut rng);
    let svd = svd_decompose(&a).unwrap();
    for pair in svd.s.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    for &sigma in &svd.s {
        assert!(sigma >= 0.0);
    }
}

#[test]
fn test_svd_wide_matches_tall_transpose() {
    // The transpose trick must give the same spectrum either way
    let mut rng = StdRng::seed_from_u64(9000);
    let a = random_matrix(5, 3, &mut rng);
    let tall = svd_decompose(&a).unwrap();
    let wide = svd_decompose(&a.transpose()).unwrap();
    assert_allclose_f64(&tall.s, &wide.s, 1e-9, 1e-9, "spectra");
}

#[test]
fn test_svd_rejects_empty() {
    assert!(svd_decompose(&Matrix::<f64>::zeros(0, 3)).is_err());
}
