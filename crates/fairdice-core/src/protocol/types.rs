//! Protocol types: parties, prompts, replies, and structured updates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Result;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    Human,
    Computer,
}

impl Party {
    /// Get the other party
    pub fn opponent(&self) -> Party {
        match self {
            Party::Human => Party::Computer,
            Party::Computer => Party::Human,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Human => write!(f, "human"),
            Party::Computer => write!(f, "computer"),
        }
    }
}

/// Result of one throw comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    HumanWins,
    ComputerWins,
    /// Equal face values. An explicit outcome, favoring neither side.
    Draw,
}

impl RoundResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundResult::HumanWins => "human wins",
            RoundResult::ComputerWins => "computer wins",
            RoundResult::Draw => "draw",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the session's comparison round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub human_face: u64,
    pub computer_face: u64,
    pub result: RoundResult,
}

impl RoundOutcome {
    /// Judge two face values: strictly greater wins, equal is a draw.
    pub fn judge(human_face: u64, computer_face: u64) -> Self {
        let result = if human_face > computer_face {
            RoundResult::HumanWins
        } else if computer_face > human_face {
            RoundResult::ComputerWins
        } else {
            RoundResult::Draw
        };
        Self {
            human_face,
            computer_face,
            result,
        }
    }
}

/// One answer collected at an input-await point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// A parsed non-negative integer. Range checks belong to the caller.
    Value(u64),
    /// The explicit exit signal; the session transitions straight to
    /// `Terminal` without completing the round in progress.
    Exit,
    /// Anything else; the caller re-prompts.
    Invalid,
}

impl Reply {
    /// Classify one line of trimmed input.
    pub fn parse(line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("x") || trimmed.eq_ignore_ascii_case("exit") {
            return Reply::Exit;
        }
        match trimmed.parse::<u64>() {
            Ok(v) => Reply::Value(v),
            Err(_) => Reply::Invalid,
        }
    }
}

/// A request for one line of input, as plain data. Wording and layout
/// belong to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Guess the committed bit deciding who picks a die first (0 or 1).
    FirstMoverGuess,
    /// Pick one of the listed die indices.
    PickDie { available: Vec<usize> },
    /// Contribute a face value in [0, 6) to the given party's throw.
    FaceContribution { party: Party },
}

/// A structured result pushed to the host for display. No formatting here;
/// the host owns presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Update {
    /// A digest was published before the human's contribution.
    CommitPublished { modulus: u64, digest: String },
    /// Key and secret revealed after the contribution; verification already
    /// passed when this update is rendered.
    Revealed { key: String, secret: u64 },
    /// Who picks a die first, with the inputs that decided it.
    FirstMover {
        secret: u64,
        guess: u64,
        combined: u64,
        first: Party,
    },
    /// A party settled on a die.
    DiePicked { party: Party, die: usize },
    /// A fair throw resolved to a face of the party's own die.
    Throw {
        party: Party,
        secret: u64,
        contribution: u64,
        face_index: u64,
        face_value: u64,
    },
    /// The comparison round finished.
    Round(RoundOutcome),
    /// The last input was not an available choice; a re-prompt follows.
    InvalidInput,
    /// The human exited mid-round.
    Exited,
}

/// Boundary between the protocol core and its host environment.
///
/// `ask` is a synchronous, blocking request for one line of text and may
/// wait indefinitely on the human. `render` receives plain structured
/// updates and owns all formatting.
pub trait GameIo {
    fn ask(&mut self, prompt: &Prompt) -> Result<String>;
    fn render(&mut self, update: Update);
}
