//! Worble
//!
//! A terminal word-guessing game: six tries to find a hidden five-letter
//! word, with colored feedback, a keyboard that remembers what each guess
//! revealed, and a histogram of past wins.
//!
//! # Quick Start
//!
//! ```rust
//! use worble::core::{Evaluation, KnowledgeTracker, LetterKnowledge, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("react").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &secret);
//! let mut keyboard = KnowledgeTracker::new();
//! keyboard.apply(&evaluation);
//!
//! assert_eq!(keyboard.get(b'a'), LetterKnowledge::Correct);
//! assert_eq!(keyboard.get(b't'), LetterKnowledge::Absent);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists and guess validation
pub mod wordlists;

// Score persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod errors;
