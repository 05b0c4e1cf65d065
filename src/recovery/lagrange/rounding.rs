//! Rational to integer rounding.
//!
//! Interpolation is carried out in exact rational arithmetic. For points
//! taken from an integer polynomial the result is always an integer and no
//! rounding takes place. When it is not (inconsistent or hand-crafted
//! points) the result is rounded to the nearest integer and the mode below
//! decides ties.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tie-breaking rule for values exactly halfway between two integers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// `2.5 → 3`, `-2.5 → -3`. Same as C `round`.
    #[default]
    HalfAwayFromZero,

    /// `2.5 → 2`, `3.5 → 4`. Banker's rounding.
    HalfEven,
}

impl RoundingMode {
    /// Rounds `value` to the nearest integer.
    pub fn round(self, value: &BigRational) -> BigInt {
        if value.is_integer() {
            return value.to_integer();
        }

        match self {
            // `Ratio::round` breaks ties away from zero.
            RoundingMode::HalfAwayFromZero => value.round().to_integer(),
            RoundingMode::HalfEven => {
                let floor = value.floor();
                let fraction = value - &floor;
                let half = BigRational::new(BigInt::one(), BigInt::from(2));
                let floor = floor.to_integer();

                if fraction < half {
                    floor
                } else if fraction > half || !(&floor % 2u32).is_zero() {
                    floor + 1
                } else {
                    floor
                }
            }
        }
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away-from-zero" | "away" => Ok(RoundingMode::HalfAwayFromZero),
            "half-even" | "even" => Ok(RoundingMode::HalfEven),
            _ => Err(Error::UnknownRoundingMode(s.to_string())),
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::HalfAwayFromZero => f.write_str("half-away-from-zero"),
            RoundingMode::HalfEven => f.write_str("half-even"),
        }
    }
}
