//! Lagrange interpolation over exact rationals.
//!
//! - [`core`]
//!   Public reconstruction API: [`Point`](core::Point),
//!   [`Secret`](core::Secret), [`reconstruct`](core::reconstruct).
//!
//! - [`rounding`]
//!   Rounding of the interpolated rational to the reported integer.
//!
//! - [`polynomial`]
//!   Integer polynomials, used to generate points for a known secret.
//!
//! ## Design notes
//!
//! - x-coordinates must be pairwise distinct; a repeat is a fatal error.
//! - Arithmetic is exact, so the result does not depend on point order.
//! - No share authenticity checks are performed.

pub mod core;
pub mod polynomial;
pub mod rounding;
