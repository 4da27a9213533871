//! Dice domain: face sets, win probabilities, and selection policy.

mod policy;
mod probability;

pub use policy::{select, Difficulty};
pub use probability::{ties, WinMatrix};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of faces on every die.
pub const FACES: usize = 6;

/// A die: exactly six non-negative integer face values, indexed 0-5.
/// Immutable once constructed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die([u64; FACES]);

impl Die {
    /// Create from a fixed array of face values.
    pub fn new(faces: [u64; FACES]) -> Self {
        Self(faces)
    }

    /// Build from a slice, rejecting anything but exactly six faces.
    pub fn from_faces(faces: &[u64]) -> Result<Self> {
        let faces: [u64; FACES] = faces.try_into().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "a die needs exactly {FACES} faces, got {}",
                faces.len()
            ))
        })?;
        Ok(Self(faces))
    }

    /// Value of the face at the given index (0-5).
    pub fn face(&self, index: usize) -> u64 {
        self.0[index]
    }

    /// All face values in declared order.
    pub fn faces(&self) -> &[u64; FACES] {
        &self.0
    }
}

impl FromStr for Die {
    type Err = Error;

    /// Parse a `"a,b,c,d,e,f"` spec. Negative or non-integer tokens fail
    /// unsigned parsing and are reported with the offending token.
    fn from_str(s: &str) -> Result<Self> {
        let faces = s
            .split(',')
            .map(|token| {
                token.trim().parse::<u64>().map_err(|_| {
                    Error::InvalidConfiguration(format!(
                        "invalid face value {token:?} in die spec {s:?}"
                    ))
                })
            })
            .collect::<Result<Vec<u64>>>()?;
        Self::from_faces(&faces)
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Die({self})")
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", faces.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_from_valid_spec() {
        let die: Die = "2,2,4,4,9,9".parse().unwrap();
        assert_eq!(die.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(die.face(4), 9);
    }

    #[test]
    fn test_die_spec_tolerates_whitespace() {
        let die: Die = " 1, 2 ,3,4,5,6".parse().unwrap();
        assert_eq!(die.faces(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_die_rejects_five_faces() {
        let err = "1,2,3,4,5".parse::<Die>().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_die_rejects_seven_faces() {
        assert!("1,2,3,4,5,6,7".parse::<Die>().is_err());
    }

    #[test]
    fn test_die_rejects_negative_face() {
        let err = "1,2,3,-4,5,6".parse::<Die>().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_die_rejects_non_integer_face() {
        assert!("1,2,3,4.5,5,6".parse::<Die>().is_err());
        assert!("1,2,three,4,5,6".parse::<Die>().is_err());
    }

    #[test]
    fn test_die_allows_zero_face() {
        let die: Die = "0,0,0,0,0,0".parse().unwrap();
        assert_eq!(die.face(0), 0);
    }

    #[test]
    fn test_die_display_round_trips() {
        let die: Die = "6,8,1,1,8,6".parse().unwrap();
        assert_eq!(die.to_string(), "6,8,1,1,8,6");
        assert_eq!(die.to_string().parse::<Die>().unwrap(), die);
    }
}
