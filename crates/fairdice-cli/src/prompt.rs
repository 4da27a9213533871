//! Line-oriented prompt collection over the terminal.

use std::io::{self, BufRead, Write};

use fairdice_core::{Die, GameIo, Prompt, Result, Update};

use crate::render;

/// `GameIo` over the process terminal: prompts go to stdout, one trimmed
/// line is read per ask, and updates are formatted by the render module.
pub struct TerminalIo {
    dice: Vec<Die>,
}

impl TerminalIo {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }
}

impl GameIo for TerminalIo {
    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        print!("{}", render::prompt_text(prompt, &self.dice));
        io::stdout().flush()?;
        read_trimmed_line()
    }

    fn render(&mut self, update: Update) {
        println!("{}", render::update_text(&update, &self.dice));
    }
}

/// Read one line from stdin; a closed stdin is an I/O error, not an exit.
pub fn read_trimmed_line() -> Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim().to_string())
}
