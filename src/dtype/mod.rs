//! Scalar element types for numla matrices
//!
//! All algorithms are generic over the [`Scalar`] trait, which abstracts the
//! element operations shared by real and complex floating-point numbers:
//! conjugation, real/imaginary part access, modulus, and scaling by a real
//! factor. `f64` and [`Complex64`] implement it.
//!
//! Complex numbers come from the `num-complex` crate; [`Complex64`] is
//! re-exported here so callers never need a direct `num_complex` dependency.

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use num_complex::Complex64;

/// Trait for matrix elements that support dense linear algebra.
///
/// Implemented for `f64` (where conjugation is the identity and the
/// imaginary part is always zero) and for [`Complex64`].
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Complex conjugate (identity for real scalars)
    fn conj(&self) -> Self;

    /// Real part
    fn re(&self) -> f64;

    /// Imaginary part (zero for real scalars)
    fn im(&self) -> f64;

    /// Modulus |x| (absolute value for real scalars)
    fn modulus(&self) -> f64;

    /// Embed a real value into this scalar type
    fn from_re(re: f64) -> Self;

    /// Multiply by a real factor
    fn scale(&self, factor: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn conj(&self) -> Self {
        *self
    }

    #[inline]
    fn re(&self) -> f64 {
        *self
    }

    #[inline]
    fn im(&self) -> f64 {
        0.0
    }

    #[inline]
    fn modulus(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn from_re(re: f64) -> Self {
        re
    }

    #[inline]
    fn scale(&self, factor: f64) -> Self {
        self * factor
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn conj(&self) -> Self {
        Complex64::new(self.re, -self.im)
    }

    #[inline]
    fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    fn im(&self) -> f64 {
        self.im
    }

    #[inline]
    fn modulus(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn from_re(re: f64) -> Self {
        Complex64::new(re, 0.0)
    }

    #[inline]
    fn scale(&self, factor: f64) -> Self {
        Complex64::new(self.re * factor, self.im * factor)
    }
}
