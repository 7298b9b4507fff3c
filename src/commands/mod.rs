//! Command implementations

pub mod play;

pub use play::{PlayConfig, WordLists, finish_game, load_wordlists, run_game, run_play};
