//! Integration tests for polynomial fitting and evaluation

mod common;

use common::assert_allclose_f64;
use numla::error::Error;
use numla::polynomial::{polyfit, polyval};

#[test]
fn test_polyfit_cubic_waypoints() {
    // Six waypoints that are nearly cubic; an order-3 least-squares fit
    // should pass within 1e-2 of every sample.
    let xvals = [9.261977, -2.06803, -19.6663, -36.868, -51.6263, -66.3482];
    let yvals = [5.17, -2.25, -15.306, -29.46, -42.85, -57.6116];

    let coeffs = polyfit(&xvals, &yvals, 3).unwrap();
    assert_eq!(coeffs.len(), 4);

    for (&x, &y) in xvals.iter().zip(yvals.iter()) {
        let fitted = polyval(&coeffs, x);
        assert!(
            (fitted - y).abs() < 1e-2,
            "residual at x={}: fitted {} vs sample {}",
            x,
            fitted,
            y
        );
    }
}

#[test]
fn test_polyfit_recovers_exact_cubic() {
    // Samples drawn from p(x) = 1 - 2x + 0.5x² + 3x³ must reproduce the
    // coefficients themselves, not just the values.
    let truth = [1.0, -2.0, 0.5, 3.0];
    let xvals: Vec<f64> = (0..6).map(|i| -2.0 + i as f64).collect();
    let yvals: Vec<f64> = xvals.iter().map(|&x| polyval(&truth, x)).collect();

    let coeffs = polyfit(&xvals, &yvals, 3).unwrap();
    assert_allclose_f64(&coeffs, &truth, 1e-8, 1e-8, "cubic coefficients");
}

#[test]
fn test_polyfit_line_through_two_points() {
    // Interpolation case: order + 1 == sample count
    let coeffs = polyfit(&[1.0, 3.0], &[2.0, 8.0], 1).unwrap();
    assert_allclose_f64(&coeffs, &[-1.0, 3.0], 1e-10, 1e-10, "line coefficients");
}

#[test]
fn test_polyfit_overdetermined_smooths_noise() {
    // Noisy line: the fit must land between the perturbed samples
    let xvals = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let yvals = [0.1, 0.9, 2.1, 2.9, 4.1, 4.9];
    let coeffs = polyfit(&xvals, &yvals, 1).unwrap();
    assert!((coeffs[0]).abs() < 0.2);
    assert!((coeffs[1] - 1.0).abs() < 0.05);
}

#[test]
fn test_polyval_horner_matches_powers() {
    let coeffs = [3.0, 0.0, -1.0, 2.0, 0.25];
    for &x in &[-2.5_f64, -1.0, 0.0, 0.5, 3.0] {
        let direct: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| c * x.powi(i as i32))
            .sum();
        assert!((polyval(&coeffs, x) - direct).abs() < 1e-10);
    }
}

#[test]
fn test_polyfit_rejects_length_mismatch() {
    assert!(matches!(
        polyfit(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_polyfit_rejects_order_zero() {
    assert!(matches!(
        polyfit(&[1.0, 2.0], &[1.0, 2.0], 0),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_polyfit_rejects_underdetermined_order() {
    // order + 1 coefficients need at least order + 1 samples
    assert!(matches!(
        polyfit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 3),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_polyfit_repeated_abscissas_singular() {
    let x = [2.0, 2.0, 2.0];
    let y = [1.0, 2.0, 3.0];
    assert!(matches!(polyfit(&x, &y, 2), Err(Error::Singular { .. })));
}
