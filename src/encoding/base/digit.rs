//! Digit alphabet and radix validation.
//!
//! The alphabet is `0-9` followed by `a-f` (case-insensitive), which covers
//! every base from 2 to 16. A character is a *valid digit* for a radix only
//! when its value is strictly below the radix.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 16;

/// A numeric base in the range `2..=16`.
///
/// Holding a `Radix` is proof that the base has been validated, so the
/// decoder itself never has to reject a base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Binary.
    pub const BINARY: Self = Radix(2);

    /// Decimal.
    pub const DECIMAL: Self = Radix(10);

    /// Hexadecimal.
    pub const HEX: Self = Radix(16);

    /// Validates `base` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] when `base` is outside `2..=16`.
    pub fn new(base: u32) -> Result<Self> {
        if (MIN_BASE..=MAX_BASE).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(Error::InvalidBase(base))
        }
    }

    /// Returns the base as a plain integer.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(base: u32) -> Result<Self> {
        Radix::new(base)
    }
}

/// Parses the decimal base string carried by share documents (`"16"`).
impl FromStr for Radix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let base = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::UnparsableBase(s.to_string()))?;
        Radix::new(base)
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a character of the hexadecimal alphabet to its value.
///
/// Returns `None` for anything outside `0-9`, `a-f` and `A-F`.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}
