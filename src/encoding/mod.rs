//! Share value encodings.
//!
//! Share values travel as digit strings in a base between 2 and 16. This
//! module turns them into exact integers and back.

pub mod base;

pub use base::core::{DecodeWarning, Decoded, decode, decode_in, encode};
pub use base::digit::{MAX_BASE, MIN_BASE, Radix, digit_value};
