//! Error types for guess validation, game progression and score storage
//!
//! Guess errors are recoverable: the player is asked again and nothing
//! changes. Store errors surface through `anyhow` in the binary and are
//! fatal when the store cannot be opened.

use crate::core::{WORD_LENGTH, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// A player's input could not be accepted as a guess
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("guess must be {len} letters, got {0}", len = WORD_LENGTH)]
    WrongLength(usize),
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// A guess was submitted to a session that cannot take one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is already over")]
    AlreadyFinished,
}

/// Score log failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("score log I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode score row: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("guess count {0} is outside 1..={max}", max = crate::game::MAX_GUESSES)]
    InvalidGuessCount(u8),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
