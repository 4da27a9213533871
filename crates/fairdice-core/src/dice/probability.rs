//! Exhaustive pairwise win probabilities over a dice set.

use serde::{Deserialize, Serialize};

use super::{Die, FACES};

/// Ordered face pairs per dice pair: 6 x 6.
const PAIRS: u32 = (FACES * FACES) as u32;

/// Pairwise win fractions over a dice set.
///
/// Entry (i, j) is the probability that die `i` rolls strictly higher than
/// die `j`, counted exhaustively over all 36 ordered face pairs. Ties count
/// toward neither side. The diagonal is undefined and stored as zero.
///
/// Built once per dice set and immutable afterwards; dice sets are small and
/// static per session, so it is always recomputed from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinMatrix {
    entries: Vec<Vec<f64>>,
}

impl WinMatrix {
    /// Compute the matrix for the given dice in declared order.
    pub fn compute(dice: &[Die]) -> Self {
        let n = dice.len();
        let mut entries = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                entries[i][j] = f64::from(wins(&dice[i], &dice[j])) / f64::from(PAIRS);
            }
        }
        Self { entries }
    }

    /// Number of dice the matrix covers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the matrix covers no dice.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Win probability of die `i` over die `j`. The diagonal is not a
    /// defined entry and reads as zero.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i][j]
    }
}

/// Count of face pairs where `a` rolls strictly higher than `b`.
fn wins(a: &Die, b: &Die) -> u32 {
    let mut count = 0;
    for x in 0..FACES {
        for y in 0..FACES {
            if a.face(x) > b.face(y) {
                count += 1;
            }
        }
    }
    count
}

/// Count of face pairs where `a` and `b` roll equal values.
pub fn ties(a: &Die, b: &Die) -> u32 {
    let mut count = 0;
    for x in 0..FACES {
        for y in 0..FACES {
            if a.face(x) == b.face(y) {
                count += 1;
            }
        }
    }
    count
}
