//! Share sets and the recovery pipeline.
//!
//! A [`ShareSet`] is what an external document provides: a threshold `k`
//! and an ordered list of shares, each written as a digit string in its own
//! base. Recovery takes the first `k` shares, decodes them and interpolates.
//!
//! The threshold check happens here, before anything is decoded: a set
//! with fewer than `k` shares fails with
//! [`Error::NotEnoughShares`] and the reconstructor is never invoked.

mod json;

use std::fmt::{Display, Formatter};

use num_bigint::{BigInt, Sign};
use tracing::{debug, warn};

use crate::encoding::{DecodeWarning, Radix, decode, encode};
use crate::error::{Error, Result};
use crate::recovery::{Point, RoundingMode, Secret, reconstruct_with};

/// One share as it appears in the input: identifier, base and digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    id: i64,
    radix: Radix,
    digits: String,
}

impl Share {
    pub fn new(id: i64, radix: Radix, digits: impl Into<String>) -> Self {
        Share {
            id,
            radix,
            digits: digits.into(),
        }
    }

    /// Encodes `point` as a share in `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeValue`] when `y` is negative, since digit
    /// strings carry no sign.
    pub fn from_point(point: &Point, radix: Radix) -> Result<Self> {
        let (sign, magnitude) = point.y().clone().into_parts();
        if sign == Sign::Minus {
            return Err(Error::NegativeValue { x: point.x() });
        }
        Ok(Share::new(point.x(), radix, encode(&magnitude, radix)))
    }

    /// The identifier, used as the x-coordinate.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decodes the share into a point, returning skipped digits alongside.
    pub fn decode(&self) -> (Point, Vec<DecodeWarning>) {
        let decoded = decode(&self.digits, self.radix);
        let y = BigInt::from_biguint(Sign::Plus, decoded.value);
        (Point::new(self.id, y), decoded.warnings)
    }
}

/// A decode warning tagged with the share it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareWarning {
    pub share_id: i64,
    pub warning: DecodeWarning,
}

impl Display for ShareWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "share {}: {}", self.share_id, self.warning)
    }
}

/// Outcome of a successful recovery.
#[derive(Clone, Debug)]
pub struct Recovery {
    /// The reconstructed secret.
    pub secret: Secret,

    /// The points used, in selection order.
    pub points: Vec<Point>,

    /// Digits skipped while decoding the selected shares.
    pub warnings: Vec<ShareWarning>,
}

impl Recovery {
    /// Formats the result the way the `recover` tool prints it.
    ///
    /// ```text
    /// Minimum number of points required (k): 3
    /// Parsed point 1: (x=1, y=4)
    /// ...
    /// The calculated secret (C) is: 3
    /// ```
    ///
    /// A non-integer interpolation adds a line with the exact value.
    pub fn render(&self, threshold: usize, rounding: RoundingMode) -> String {
        let mut out = format!("Minimum number of points required (k): {threshold}\n");

        for (i, point) in self.points.iter().enumerate() {
            out.push_str(&format!("Parsed point {}: {}\n", i + 1, point));
        }

        out.push_str(&format!("The calculated secret (C) is: {}\n", self.secret));

        if !self.secret.is_exact() {
            out.push_str(&format!(
                "Exact interpolated value: {} (rounded {})\n",
                self.secret.exact(),
                rounding
            ));
        }

        out
    }
}

/// An ordered collection of shares together with the threshold `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    threshold: usize,
    declared_total: Option<usize>,
    shares: Vec<Share>,
}

impl ShareSet {
    /// Creates a share set requiring `threshold` shares.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] when `threshold` is zero.
    pub fn new(threshold: usize, shares: Vec<Share>) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(0));
        }
        Ok(ShareSet {
            threshold,
            declared_total: None,
            shares,
        })
    }

    /// Encodes `points` as shares in `radix`.
    pub fn from_points(threshold: usize, points: &[Point], radix: Radix) -> Result<Self> {
        let shares = points
            .iter()
            .map(|p| Share::from_point(p, radix))
            .collect::<Result<Vec<_>>>()?;
        ShareSet::new(threshold, shares)
    }

    /// Replaces the threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(0));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Records the total share count announced by the document (`n`).
    pub fn with_declared_total(mut self, total: usize) -> Self {
        self.declared_total = Some(total);
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn declared_total(&self) -> Option<usize> {
        self.declared_total
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Returns the first `k` shares in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughShares`] when fewer than `k` are present.
    pub fn select(&self) -> Result<&[Share]> {
        let required = self.threshold;
        let found = self.shares.len();

        if found < required {
            return Err(Error::NotEnoughShares { found, required });
        }

        Ok(&self.shares[..required])
    }

    /// Selects, decodes and reconstructs.
    ///
    /// Decode warnings never abort recovery; each one is logged and returned
    /// in [`Recovery::warnings`].
    pub fn recover(&self, rounding: RoundingMode) -> Result<Recovery> {
        let selected = self.select()?;

        debug!(
            threshold = self.threshold,
            available = self.shares.len(),
            "selected shares"
        );

        let mut points = Vec::with_capacity(selected.len());
        let mut warnings = Vec::new();

        for share in selected {
            let (point, skipped) = share.decode();

            for warning in skipped {
                warn!(share = share.id, "{}", warning);
                warnings.push(ShareWarning {
                    share_id: share.id,
                    warning,
                });
            }

            points.push(point);
        }

        let secret = reconstruct_with(&points, rounding)?;

        if !secret.is_exact() {
            warn!(exact = %secret.exact(), rounded = %secret.value(), "interpolated value is not an integer");
        }

        Ok(Recovery {
            secret,
            points,
            warnings,
        })
    }
}
