//! Scripted game I/O for tests and demos.

use std::collections::VecDeque;
use std::io;

use super::types::{GameIo, Prompt, Update};
use crate::error::Result;

/// A `GameIo` that serves canned replies in order and records every update
/// it was asked to render. Running out of replies surfaces as an I/O error,
/// the same as a closed stdin would.
pub struct ScriptedIo {
    replies: VecDeque<String>,
    updates: Vec<Update>,
}

impl ScriptedIo {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            updates: Vec::new(),
        }
    }

    /// Updates rendered so far, in order.
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }
}

impl GameIo for ScriptedIo {
    fn ask(&mut self, _prompt: &Prompt) -> Result<String> {
        self.replies.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "reply script exhausted").into()
        })
    }

    fn render(&mut self, update: Update) {
        self.updates.push(update);
    }
}
