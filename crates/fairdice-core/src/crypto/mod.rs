//! Cryptographic primitives: keyed commitments and fair-value generation.

mod commitment;
mod fair;

pub use commitment::{CommitKey, Commitment};
pub use fair::{combine, uniform_int, FairRound};
