//! Integer polynomials used to produce shares.
//!
//! This is the splitting side of the scheme: a secret is the constant
//! coefficient, and each share is one evaluation of the polynomial at a
//! distinct non-zero x.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::recovery::lagrange::core::Point;

/// A polynomial with integer coefficients in increasing degree order:
///
/// ```text
/// f(x) = coefficients[0] + coefficients[1]·x + coefficients[2]·x² + ...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Builds a polynomial from its coefficients, lowest degree first.
    ///
    /// An empty coefficient list is the zero polynomial.
    pub fn new<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let mut coefficients: Vec<BigInt> = coefficients.into_iter().map(Into::into).collect();
        if coefficients.is_empty() {
            coefficients.push(BigInt::zero());
        }
        Polynomial { coefficients }
    }

    /// The value at zero, i.e. the secret.
    pub fn constant(&self) -> &BigInt {
        &self.coefficients[0]
    }

    /// Number of points needed to reconstruct the constant term.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * &x + c)
    }

    /// Evaluates the polynomial at each of `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateX`] if an x-coordinate repeats, since such
    /// a set could not be used for reconstruction.
    pub fn sample(&self, xs: &[i64]) -> Result<Vec<Point>> {
        let mut points: Vec<Point> = Vec::with_capacity(xs.len());

        for &x in xs {
            if points.iter().any(|p| p.x() == x) {
                return Err(Error::DuplicateX { x });
            }
            points.push(Point::new(x, self.evaluate(x)));
        }

        Ok(points)
    }
}
