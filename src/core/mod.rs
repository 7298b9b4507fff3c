//! Core domain types for the game
//!
//! Words, guess evaluation and keyboard knowledge. Everything here is pure
//! and independent of terminal or file I/O.

mod evaluation;
mod knowledge;
mod word;

pub use evaluation::{Evaluation, LetterResult};
pub use knowledge::{ALPHABET_SIZE, KnowledgeTracker, LetterKnowledge};
pub use word::{WORD_LENGTH, Word, WordError};
