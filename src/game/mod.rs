//! Game session state machine

mod session;

pub use session::{GameSession, GameState, GuessRecord, MAX_GUESSES};
