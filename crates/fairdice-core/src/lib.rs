//! Fairdice Core Library
//!
//! This crate provides the commit-reveal fairness primitives, the
//! non-transitive dice probability engine, and the session state machine
//! for the two-party dice game.

pub mod crypto;
pub mod dice;
pub mod error;
pub mod protocol;

pub use crypto::{combine, uniform_int, CommitKey, Commitment, FairRound};
pub use dice::{select, ties, Die, Difficulty, WinMatrix, FACES};
pub use error::{Error, Result};
pub use protocol::{
    GameIo, GameSession, Party, Prompt, Reply, RoundOutcome, RoundResult, ScriptedIo, SessionId,
    SessionState, Update,
};
