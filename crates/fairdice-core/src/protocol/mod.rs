//! Protocol types and the session state machine.

mod mock;
mod session;
mod types;

pub use mock::ScriptedIo;
pub use session::{GameSession, SessionState};
pub use types::{GameIo, Party, Prompt, Reply, RoundOutcome, RoundResult, SessionId, Update};
