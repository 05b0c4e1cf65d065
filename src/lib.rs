//! Threshold secret recovery from base-encoded shares.
//!
//! A secret is hidden as the constant term of a polynomial of degree
//! `k - 1`. Each share is one point `(x, y)` of that polynomial, with `y`
//! written as a digit string in a base between 2 and 16. Any `k` shares
//! recover the secret by Lagrange interpolation at `x = 0`.
//!
//! # Module overview
//!
//! - `encoding`
//!   Arbitrary-base digit strings to exact integers. Digits that do not
//!   belong to the declared base are skipped and reported as warnings;
//!   decoding itself never fails.
//!
//! - `recovery`
//!   Points, exact Lagrange interpolation at zero and the rounding policy
//!   for the reported integer. A repeated x-coordinate aborts the
//!   computation.
//!
//! - `input`
//!   Share sets: the threshold, first-`k` selection, the JSON document
//!   format, and the full decode-then-interpolate pipeline.
//!
//! - `config`
//!   Settings layered over a share document (rounding mode, threshold
//!   override).
//!
//! # Example
//!
//! ```
//! use secret_recovery::{Point, reconstruct};
//!
//! // y = x² + 3
//! let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
//! let secret = reconstruct(&points).unwrap();
//! assert_eq!(secret.to_string(), "3");
//! ```
//!
//! # Design goals
//!
//! - Exact arithmetic end to end (no floating point)
//! - Pure functions; diagnostics are returned, not printed
//! - No persistence and no share authentication

pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod recovery;

pub use config::RecoveryConfig;
pub use encoding::{DecodeWarning, Decoded, Radix, decode};
pub use error::{Error, Result};
pub use input::{Recovery, Share, ShareSet, ShareWarning};
pub use recovery::{Point, Polynomial, RoundingMode, Secret, reconstruct, reconstruct_with};
