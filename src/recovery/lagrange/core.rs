//! Secret reconstruction by Lagrange interpolation at zero.
//!
//! Given `k` points of a polynomial of degree at most `k - 1`, the value at
//! zero is
//!
//! ```text
//! f(0) = Σⱼ yⱼ · Πᵢ≠ⱼ (-xᵢ) / (xⱼ - xᵢ)
//! ```
//!
//! Each term is formed as one fraction `yⱼ · Π(-xᵢ) / Π(xⱼ - xᵢ)` and all
//! terms are summed as exact rationals, so the order of summation has no
//! effect on the result and no precision is lost for large `y` values.
//!
//! The polynomial itself is never reconstructed.

use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{Error, Result};
use crate::recovery::lagrange::rounding::RoundingMode;

/// A decoded share: one evaluation `y = f(x)` of the hidden polynomial.
///
/// Points are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}

/// The reconstructed constant term.
///
/// Keeps the exact interpolated value next to the rounded integer so that a
/// caller can tell whether rounding changed anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secret {
    value: BigInt,
    exact: BigRational,
}

impl Secret {
    /// The secret, rounded to an integer.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The interpolated value before rounding.
    pub fn exact(&self) -> &BigRational {
        &self.exact
    }

    /// `true` when the interpolated value was already an integer.
    pub fn is_exact(&self) -> bool {
        self.exact.is_integer()
    }

    pub fn into_value(self) -> BigInt {
        self.value
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Reconstructs the secret with the default rounding mode.
///
/// See [`reconstruct_with`].
pub fn reconstruct(points: &[Point]) -> Result<Secret> {
    reconstruct_with(points, RoundingMode::default())
}

/// Reconstructs `f(0)` from `points`, rounding with `rounding`.
///
/// Every point is used. Callers select the threshold subset beforehand.
///
/// # Errors
///
/// - [`Error::NoPoints`] if `points` is empty
/// - [`Error::DuplicateX`] if two points share an x-coordinate; nothing is
///   returned in that case
pub fn reconstruct_with(points: &[Point], rounding: RoundingMode) -> Result<Secret> {
    if points.is_empty() {
        return Err(Error::NoPoints);
    }

    debug!(points = points.len(), %rounding, "interpolating at zero");

    let mut acc = BigRational::zero();

    for (j, pj) in points.iter().enumerate() {
        let xj = BigInt::from(pj.x);
        let mut num = BigInt::one();
        let mut den = BigInt::one();

        for (i, pi) in points.iter().enumerate() {
            if i == j {
                continue;
            }

            let xi = BigInt::from(pi.x);
            let diff = &xj - &xi;

            if diff.is_zero() {
                return Err(Error::DuplicateX { x: pj.x });
            }

            num *= -xi;
            den *= diff;
        }

        acc += BigRational::new(&pj.y * num, den);
    }

    let value = rounding.round(&acc);

    Ok(Secret { value, exact: acc })
}
