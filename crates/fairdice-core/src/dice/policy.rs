//! Adversarial die selection for the automated party.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Die, WinMatrix};
use crate::crypto::uniform_int;
use crate::error::{Error, Result};

/// Strength of the automated opponent's die selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random pick among the remaining dice.
    Easy,
    /// Pick the remaining die most likely to beat the opponent's.
    Medium,
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Difficulty::Easy),
            "medium" | "m" | "2" => Ok(Difficulty::Medium),
            _ => Err(Error::InvalidSelection),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
        }
    }
}

/// Pick a die index for the automated party.
///
/// `excluded` is the opponent's pick, removed from the candidate pool.
/// Medium consults the win matrix and takes the candidate maximizing
/// `P[candidate beats excluded]`; ties on the probability resolve to the
/// lowest index in declared order. When the automated party moves first
/// there is no die to beat yet, so Medium falls back to a uniform pick,
/// as Easy always does.
pub fn select<R: RngCore>(
    dice: &[Die],
    excluded: Option<usize>,
    difficulty: Difficulty,
    matrix: &WinMatrix,
    rng: &mut R,
) -> Result<usize> {
    let candidates: Vec<usize> = (0..dice.len()).filter(|&i| Some(i) != excluded).collect();
    if candidates.is_empty() {
        return Err(Error::NoAvailableDice);
    }

    match (difficulty, excluded) {
        (Difficulty::Medium, Some(target)) => {
            let mut best = candidates[0];
            for &candidate in &candidates[1..] {
                if matrix.get(candidate, target) > matrix.get(best, target) {
                    best = candidate;
                }
            }
            Ok(best)
        }
        _ => {
            let pick = uniform_int(rng, candidates.len() as u64)? as usize;
            Ok(candidates[pick])
        }
    }
}
