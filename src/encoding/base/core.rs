//! Positional-notation decoder for share values.
//!
//! A share value is a digit string written in some base between 2 and 16.
//! Decoding evaluates it most-significant digit first:
//!
//! ```text
//! value = (((d₀·b + d₁)·b + d₂)·b + ...)
//! ```
//!
//! The accumulator is an arbitrary-precision unsigned integer, so strings
//! far longer than 64 bits decode exactly.
//!
//! ## Diagnostics
//!
//! Decoding never fails once the radix is valid:
//!
//! - a character from the alphabet whose value is not below the base is
//!   skipped and reported as a [`DecodeWarning`]
//! - a character outside the alphabet is skipped silently
//!
//! Warnings are returned to the caller instead of being printed, so the
//! caller decides whether to log, aggregate or ignore them.

use std::fmt::{Display, Formatter};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::encoding::base::digit::{Radix, digit_value};
use crate::error::Result;

/// A character that belongs to the alphabet but not to the declared base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeWarning {
    /// Character index within the digit string.
    pub position: usize,

    /// The offending character.
    pub character: char,

    /// The base the string was declared in.
    pub base: u32,
}

impl Display for DecodeWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid digit '{}' for base {} at position {}",
            self.character, self.base, self.position
        )
    }
}

/// Result of decoding a digit string: the value plus any skipped digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub value: BigUint,
    pub warnings: Vec<DecodeWarning>,
}

impl Decoded {
    /// Returns `true` when every character was used.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Decodes `digits` written in `radix`.
///
/// Pure and deterministic: the same input always yields the same value and
/// the same warnings. The empty string decodes to zero.
pub fn decode(digits: &str, radix: Radix) -> Decoded {
    let base = radix.get();
    let mut value = BigUint::zero();
    let mut warnings = Vec::new();

    for (position, character) in digits.chars().enumerate() {
        let Some(d) = digit_value(character) else {
            continue;
        };

        if d >= base {
            warnings.push(DecodeWarning {
                position,
                character,
                base,
            });
            continue;
        }

        value *= base;
        value += d;
    }

    Decoded { value, warnings }
}

/// Validates `base` and decodes `digits`.
///
/// # Errors
///
/// Returns [`Error::InvalidBase`](crate::Error::InvalidBase) when `base` is
/// outside `2..=16`.
pub fn decode_in(digits: &str, base: u32) -> Result<Decoded> {
    Ok(decode(digits, Radix::new(base)?))
}

/// Writes `value` in `radix` using lowercase digits.
///
/// `decode(&encode(v, r), r).value == v` for every value and radix.
pub fn encode(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(radix.get())
}
