//! Error taxonomy for the fairdice protocol.

use thiserror::Error;

/// Errors from fairdice operations.
///
/// Validation errors (`InvalidSelection`) are recovered by re-prompting at
/// the boundary where they occur. Integrity errors (`CommitmentMismatch`,
/// `NoAvailableDice`) abort the current round: continuing would forfeit the
/// fairness guarantee.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("range and modulus must be positive and fit a single 32-bit draw")]
    InvalidRange,

    #[error("selection is not one of the offered choices")]
    InvalidSelection,

    #[error("revealed value does not match its commitment")]
    CommitmentMismatch,

    #[error("no candidate dice remain for selection")]
    NoAvailableDice,

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
