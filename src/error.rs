//! Error types for secret recovery.
//!
//! Every fatal condition of the crate is a variant of [`Error`]. Recoverable
//! decoding problems are not errors; they are reported as
//! [`DecodeWarning`](crate::encoding::DecodeWarning) values next to the
//! decoded number.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base {0}: supported bases are 2 to 16")]
    InvalidBase(u32),

    #[error("invalid base {0:?}: expected a decimal number")]
    UnparsableBase(String),

    #[error("invalid input: x values must be unique (x = {x} appears more than once)")]
    DuplicateX { x: i64 },

    #[error("invalid input: at least one point is required")]
    NoPoints,

    #[error("not enough shares: found {found}, but need {required}")]
    NotEnoughShares { found: usize, required: usize },

    #[error("invalid threshold {0}: at least one share must be required")]
    InvalidThreshold(i64),

    #[error("missing \"keys\" entry with the threshold \"k\"")]
    MissingKeys,

    #[error("invalid share identifier {0:?}: expected an integer")]
    InvalidIdentifier(String),

    #[error("malformed share {id}: {reason}")]
    MalformedShare { id: String, reason: String },

    #[error("cannot encode negative value for share {x}")]
    NegativeValue { x: i64 },

    #[error("unknown rounding mode {0:?}: expected half-away-from-zero or half-even")]
    UnknownRoundingMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
