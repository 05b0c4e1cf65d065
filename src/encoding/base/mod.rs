//! Arbitrary-base number decoding.
//!
//! - [`core`]
//!   Decoding and encoding of digit strings, with per-character diagnostics.
//!
//! - [`digit`]
//!   The `0-9a-f` alphabet and the validated [`Radix`](digit::Radix) type.

pub mod core;
pub mod digit;
