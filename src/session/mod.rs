//! Conversational drafting session
//!
//! - `turn`: one human message and one model reply
//! - `controller`: the loop that runs turns, executes tools and stops once the draft is saved
//! - `termination`: the stop check run after every turn
//! - `history`: the append-only conversation log
//! - `prompt`: fixed prompt text

pub mod controller;
pub mod history;
pub mod prompt;
pub mod termination;
pub mod turn;

pub use controller::{Session, SessionConfig, SessionReport, SessionState};
pub use history::History;
pub use termination::{Decision, decide};
pub use turn::{TurnExecutor, TurnOutcome};
