//! Menu loop driving one protocol session per played round.

use std::io::{self, Write};

use colored::Colorize;
use fairdice_core::{Die, Difficulty, Error, GameSession, Result, WinMatrix};
use rand::rngs::OsRng;
use tracing::warn;

use crate::prompt::{read_trimmed_line, TerminalIo};
use crate::render;

pub struct App {
    dice: Vec<Die>,
    matrix: WinMatrix,
}

impl App {
    /// Build the app and its win matrix; the dice set never changes, so the
    /// matrix is computed once up front.
    pub fn new(dice: Vec<Die>) -> Self {
        let matrix = WinMatrix::compute(&dice);
        Self { dice, matrix }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", "fairdice: provably-fair non-transitive dice".bold());
        for (i, die) in self.dice.iter().enumerate() {
            println!("  die {i}: {die}");
        }

        loop {
            println!();
            println!("  1) play a round");
            println!("  2) view probability matrix");
            println!("  x) exit");
            print!("choose: ");
            io::stdout().flush()?;

            match read_trimmed_line()?.to_ascii_lowercase().as_str() {
                "1" | "play" => self.play_round()?,
                "2" | "matrix" => {
                    println!("{}", render::matrix_table(&self.dice, &self.matrix));
                }
                "x" | "exit" => return Ok(()),
                other => {
                    println!("{}", format!("unknown choice {other:?}").yellow());
                }
            }
        }
    }

    /// One session. A commitment mismatch aborts the round but not the
    /// process: the result cannot be trusted, so it is surfaced as a
    /// fairness failure and the menu resumes.
    fn play_round(&self) -> Result<()> {
        let Some(difficulty) = self.ask_difficulty()? else {
            return Ok(());
        };
        let mut session = GameSession::new(&self.dice, &self.matrix, difficulty)?;
        let mut io = TerminalIo::new(self.dice.clone());
        match session.run(&mut OsRng, &mut io) {
            Ok(_) => Ok(()),
            Err(Error::CommitmentMismatch) => {
                warn!(session = %session.id(), "commitment mismatch, round aborted");
                eprintln!(
                    "{}",
                    "fairness failure: the revealed value does not match its commitment; round aborted"
                        .red()
                        .bold()
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn ask_difficulty(&self) -> Result<Option<Difficulty>> {
        loop {
            print!("difficulty [easy/medium] (x to exit): ");
            io::stdout().flush()?;
            let line = read_trimmed_line()?;
            if line.eq_ignore_ascii_case("x") || line.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            match line.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(Some(difficulty)),
                Err(Error::InvalidSelection) => {
                    println!("{}", "not a difficulty, try again".yellow());
                }
                Err(err) => return Err(err),
            }
        }
    }
}
