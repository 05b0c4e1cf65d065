//! Threshold secret recovery.
//!
//! A secret is the constant term of a hidden polynomial of degree `k - 1`.
//! Each share is one point on that polynomial, and any `k` points with
//! distinct x-coordinates determine the constant term.
//!
//! # Lagrange interpolation
//!
//! The [`lagrange`] submodule evaluates the interpolating polynomial at zero
//! without building it:
//!
//! ```text
//! secret = Σⱼ yⱼ · Πᵢ≠ⱼ (-xᵢ) / (xⱼ - xᵢ)
//! ```
//!
//! All arithmetic is exact (arbitrary-precision rationals). The final value
//! is rounded to an integer according to a [`RoundingMode`], which only
//! matters when the points do not come from an integer polynomial.
//!
//! ## Provided functionality
//!
//! - **Reconstruction**: [`reconstruct`] and [`reconstruct_with`].
//! - **Sampling**: [`Polynomial::sample`] produces points for a known
//!   secret, which is how share sets are generated for testing.
//!
//! This module does not select shares or check thresholds. That is done by
//! [`crate::input`], before any point reaches the reconstructor.

pub mod lagrange;

pub use lagrange::core::{Point, Secret, reconstruct, reconstruct_with};
pub use lagrange::polynomial::Polynomial;
pub use lagrange::rounding::RoundingMode;
