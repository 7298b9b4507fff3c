//! Display model for the board, independent of terminal escapes
//!
//! Guesses and keys become `Cell`s: a character plus a `Highlight`. The
//! display module turns cells into colored text.

use crate::core::{KnowledgeTracker, LetterKnowledge, LetterResult};
use crate::game::GuessRecord;

/// Screen width of the title banner and wrapped messages
pub const SCREEN_WIDTH: usize = 19;

/// Indent applied to each past guess
pub const GUESS_INDENT: usize = 7;

/// Keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Glyph shown for letters known to be absent
pub const ABSENT_GLYPH: char = '_';

/// Background highlight for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Plain,
    Yellow,
    Green,
}

/// One displayed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub text: char,
    pub highlight: Highlight,
}

impl Cell {
    #[must_use]
    pub const fn new(text: char, highlight: Highlight) -> Self {
        Self { text, highlight }
    }
}

impl From<LetterResult> for Highlight {
    fn from(result: LetterResult) -> Self {
        match result {
            LetterResult::Correct => Self::Green,
            LetterResult::Present => Self::Yellow,
            LetterResult::Absent => Self::Plain,
        }
    }
}

/// Cells for a past guess, one per letter
#[must_use]
pub fn guess_cells(record: &GuessRecord) -> Vec<Cell> {
    record
        .word
        .chars()
        .iter()
        .zip(record.evaluation.results())
        .map(|(&letter, &result)| Cell::new(char::from(letter), result.into()))
        .collect()
}

/// Cell for a single keyboard key
#[must_use]
pub fn key_cell(letter: u8, knowledge: LetterKnowledge) -> Cell {
    let letter = char::from(letter);
    match knowledge {
        LetterKnowledge::Unknown => Cell::new(letter, Highlight::Plain),
        LetterKnowledge::Absent => Cell::new(ABSENT_GLYPH, Highlight::Plain),
        LetterKnowledge::Present => Cell::new(letter, Highlight::Yellow),
        LetterKnowledge::Correct => Cell::new(letter, Highlight::Green),
    }
}

/// Keyboard rows as `(indent, cells)`, staggered one column per row
#[must_use]
pub fn keyboard_rows(knowledge: &KnowledgeTracker) -> Vec<(usize, Vec<Cell>)> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let cells = row
                .bytes()
                .map(|letter| key_cell(letter, knowledge.get(letter)))
                .collect();
            (indent, cells)
        })
        .collect()
}

/// Title line: the name centred in a `~` rule
#[must_use]
pub fn title_banner() -> String {
    format!("{:~^SCREEN_WIDTH$}", " Worble! ")
}

/// One histogram line, e.g. `3:*****`
#[must_use]
pub fn histogram_line(guesses: u8, width: usize) -> String {
    format!("{guesses}:{}", "*".repeat(width))
}

/// Greedy word wrap; words longer than `width` get a line of their own
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
