//! Session state machine for one provably-fair comparison round.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::types::{GameIo, Party, Prompt, Reply, RoundOutcome, SessionId, Update};
use crate::crypto::{combine, FairRound};
use crate::dice::{select, Die, Difficulty, WinMatrix, FACES};
use crate::error::{Error, Result};

/// Protocol states in transition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Init,
    FirstMoverDecided,
    DiceSelected,
    ThrowRound,
    Result,
    Terminal,
}

/// One game session: the dice set, the chosen difficulty, each party's
/// selected die, and the outcome of the comparison round.
///
/// The session borrows the dice set and the matrix computed over it; the
/// two selected dice are held as distinct indices into that shared slice.
/// State is mutated only by [`GameSession::run`] and discarded with the
/// session, never persisted.
#[derive(Debug)]
pub struct GameSession<'a> {
    id: SessionId,
    dice: &'a [Die],
    matrix: &'a WinMatrix,
    difficulty: Difficulty,
    state: SessionState,
    first_mover: Option<Party>,
    human_die: Option<usize>,
    computer_die: Option<usize>,
    outcome: Option<RoundOutcome>,
}

impl<'a> GameSession<'a> {
    /// Create a session over at least three dice and their win matrix.
    pub fn new(dice: &'a [Die], matrix: &'a WinMatrix, difficulty: Difficulty) -> Result<Self> {
        if dice.len() < 3 {
            return Err(Error::InvalidConfiguration(format!(
                "need at least 3 dice to play, got {}",
                dice.len()
            )));
        }
        if matrix.len() != dice.len() {
            return Err(Error::InvalidConfiguration(
                "win matrix does not cover the dice set".to_string(),
            ));
        }
        Ok(Self {
            id: SessionId::new(),
            dice,
            matrix,
            difficulty,
            state: SessionState::Init,
            first_mover: None,
            human_die: None,
            computer_die: None,
            outcome: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn first_mover(&self) -> Option<Party> {
        self.first_mover
    }

    /// Index of the human's selected die, once picked.
    pub fn human_die(&self) -> Option<usize> {
        self.human_die
    }

    /// Index of the computer's selected die, once picked.
    pub fn computer_die(&self) -> Option<usize> {
        self.computer_die
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Drive the session from `Init` to `Terminal`.
    ///
    /// Returns the comparison outcome, or `None` when the human exited at
    /// an input point before the round completed. Integrity failures
    /// (`CommitmentMismatch`, `NoAvailableDice`) abort the session as
    /// errors.
    pub fn run<R: RngCore, I: GameIo>(
        &mut self,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<RoundOutcome>> {
        if self.state != SessionState::Init {
            return Err(Error::InvalidConfiguration(
                "session has already been run".to_string(),
            ));
        }
        info!(session = %self.id, difficulty = %self.difficulty, "session started");

        let Some(first) = self.decide_first_mover(rng, io)? else {
            return Ok(self.exit(io));
        };
        let Some((human_die, computer_die)) = self.pick_dice(first, rng, io)? else {
            return Ok(self.exit(io));
        };
        let Some(outcome) = self.compare_throws(first, human_die, computer_die, rng, io)? else {
            return Ok(self.exit(io));
        };

        self.state = SessionState::Result;
        io.render(Update::Round(outcome.clone()));
        self.outcome = Some(outcome.clone());
        self.state = SessionState::Terminal;
        info!(session = %self.id, result = %outcome.result, "session finished");
        Ok(Some(outcome))
    }

    /// `Init -> FirstMoverDecided`: a fair bit decides who picks a die
    /// first. Fixed mapping: combined 0 gives the computer the first pick,
    /// combined 1 the human.
    fn decide_first_mover<R: RngCore, I: GameIo>(
        &mut self,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<Party>> {
        let Some((secret, guess, combined)) =
            self.fair_value(rng, io, 2, &Prompt::FirstMoverGuess)?
        else {
            return Ok(None);
        };

        let first = if combined == 0 {
            Party::Computer
        } else {
            Party::Human
        };
        self.first_mover = Some(first);
        self.state = SessionState::FirstMoverDecided;
        debug!(session = %self.id, %first, "first mover decided");
        io.render(Update::FirstMover {
            secret,
            guess,
            combined,
            first,
        });
        Ok(Some(first))
    }

    /// `FirstMoverDecided -> DiceSelected`: the first mover picks from the
    /// full set, the second from the remainder. The picks are distinct by
    /// construction.
    fn pick_dice<R: RngCore, I: GameIo>(
        &mut self,
        first: Party,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<(usize, usize)>> {
        let Some(first_pick) = self.pick_for(first, None, rng, io)? else {
            return Ok(None);
        };
        let Some(second_pick) = self.pick_for(first.opponent(), Some(first_pick), rng, io)? else {
            return Ok(None);
        };

        let (human_die, computer_die) = match first {
            Party::Human => (first_pick, second_pick),
            Party::Computer => (second_pick, first_pick),
        };
        self.human_die = Some(human_die);
        self.computer_die = Some(computer_die);
        self.state = SessionState::DiceSelected;
        debug!(session = %self.id, human_die, computer_die, "dice selected");
        Ok(Some((human_die, computer_die)))
    }

    fn pick_for<R: RngCore, I: GameIo>(
        &self,
        party: Party,
        excluded: Option<usize>,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<usize>> {
        let pick = match party {
            Party::Computer => select(self.dice, excluded, self.difficulty, self.matrix, rng)?,
            Party::Human => {
                let available: Vec<usize> = (0..self.dice.len())
                    .filter(|&i| Some(i) != excluded)
                    .collect();
                if available.is_empty() {
                    return Err(Error::NoAvailableDice);
                }
                let prompt = Prompt::PickDie {
                    available: available.clone(),
                };
                loop {
                    match Reply::parse(&io.ask(&prompt)?) {
                        Reply::Value(v) if available.contains(&(v as usize)) => {
                            break v as usize;
                        }
                        Reply::Exit => return Ok(None),
                        _ => io.render(Update::InvalidInput),
                    }
                }
            }
        };
        io.render(Update::DiePicked { party, die: pick });
        Ok(Some(pick))
    }

    /// `DiceSelected -> Result`: one fair throw per party, first mover
    /// first; each combined value indexes that party's own die.
    fn compare_throws<R: RngCore, I: GameIo>(
        &mut self,
        first: Party,
        human_die: usize,
        computer_die: usize,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<RoundOutcome>> {
        let mut human_face = 0;
        let mut computer_face = 0;
        for party in [first, first.opponent()] {
            self.state = SessionState::ThrowRound;
            let die_index = match party {
                Party::Human => human_die,
                Party::Computer => computer_die,
            };
            let Some(face_value) = self.throw(party, die_index, rng, io)? else {
                return Ok(None);
            };
            match party {
                Party::Human => human_face = face_value,
                Party::Computer => computer_face = face_value,
            }
        }
        Ok(Some(RoundOutcome::judge(human_face, computer_face)))
    }

    fn throw<R: RngCore, I: GameIo>(
        &self,
        party: Party,
        die_index: usize,
        rng: &mut R,
        io: &mut I,
    ) -> Result<Option<u64>> {
        let modulus = FACES as u64;
        let prompt = Prompt::FaceContribution { party };
        let Some((secret, contribution, face_index)) =
            self.fair_value(rng, io, modulus, &prompt)?
        else {
            return Ok(None);
        };

        let face_value = self.dice[die_index].face(face_index as usize);
        debug!(session = %self.id, %party, face_index, face_value, "throw resolved");
        io.render(Update::Throw {
            party,
            secret,
            contribution,
            face_index,
            face_value,
        });
        Ok(Some(face_value))
    }

    /// One full commit-contribute-reveal-combine exchange.
    ///
    /// The digest is published before the human contributes; the reveal is
    /// verified before the combined value is trusted, and a mismatch aborts
    /// the round.
    fn fair_value<R: RngCore, I: GameIo>(
        &self,
        rng: &mut R,
        io: &mut I,
        modulus: u64,
        prompt: &Prompt,
    ) -> Result<Option<(u64, u64, u64)>> {
        let round = FairRound::open_with(rng, modulus)?;
        let digest = *round.commitment();
        io.render(Update::CommitPublished {
            modulus,
            digest: digest.to_string(),
        });

        let Some(contribution) = self.ask_in_range(io, prompt, modulus)? else {
            return Ok(None);
        };

        let (key, secret) = round.reveal();
        if !digest.verify(&key, secret) {
            return Err(Error::CommitmentMismatch);
        }
        io.render(Update::Revealed {
            key: hex::encode(key.as_bytes()),
            secret,
        });

        let combined = combine(secret, contribution, modulus)?;
        Ok(Some((secret, contribution, combined)))
    }

    /// Re-prompt until the human supplies a value in `[0, range)` or exits.
    fn ask_in_range<I: GameIo>(
        &self,
        io: &mut I,
        prompt: &Prompt,
        range: u64,
    ) -> Result<Option<u64>> {
        loop {
            match Reply::parse(&io.ask(prompt)?) {
                Reply::Value(v) if v < range => return Ok(Some(v)),
                Reply::Exit => return Ok(None),
                _ => io.render(Update::InvalidInput),
            }
        }
    }

    fn exit<I: GameIo>(&mut self, io: &mut I) -> Option<RoundOutcome> {
        self.state = SessionState::Terminal;
        info!(session = %self.id, "session exited by the human");
        io.render(Update::Exited);
        None
    }
}
