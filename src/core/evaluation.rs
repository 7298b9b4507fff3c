//! Guess evaluation against the secret word
//!
//! Every guess position is classified as:
//! - Correct (letter in the right position)
//! - Present (letter elsewhere in the secret, not yet used up)
//! - Absent (no unused occurrence left for this position)
//!
//! Alongside the per-position results, an evaluation keeps the letter-level
//! facts the keyboard needs: which letters were placed, how many occurrences
//! of each letter are available for Present, and which letters never occur
//! in the secret at all.

use super::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Correct,
    Present,
    Absent,
}

/// The outcome of comparing one guess with the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    results: [LetterResult; WORD_LENGTH],
    correct_letters: Vec<u8>,
    present_counts: FxHashMap<u8, u8>,
    absent_letters: Vec<u8>,
}

impl Evaluation {
    /// Evaluate `guess` against `secret`
    ///
    /// Duplicate letters are handled the usual way: positional matches are
    /// claimed first, then the remaining occurrences of each letter are
    /// handed out as Present from left to right. A letter that appears more
    /// often in the guess than in the secret gets Absent for the surplus.
    ///
    /// # Examples
    /// ```
    /// use worble::core::{Evaluation, LetterResult, Word};
    ///
    /// let secret = Word::new("sheep").unwrap();
    /// let guess = Word::new("eerie").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    ///
    /// assert_eq!(evaluation.results()[0], LetterResult::Present);
    /// assert_eq!(evaluation.results()[1], LetterResult::Present);
    /// assert_eq!(evaluation.results()[4], LetterResult::Absent);
    /// assert_eq!(evaluation.absent_letters(), b"ir");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess_counts = guess.char_counts();
        let secret_counts = secret.char_counts();

        let mut results = [LetterResult::Absent; WORD_LENGTH];
        let mut correct_letters = Vec::new();
        let mut placed: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                results[i] = LetterResult::Correct;
                correct_letters.push(g);
                *placed.entry(g).or_insert(0) += 1;
            }
        }

        // Occurrences left for Present: min(guess, secret) minus those already placed
        let present_counts: FxHashMap<u8, u8> = guess_counts
            .iter()
            .filter_map(|(&letter, &in_guess)| {
                let in_secret = secret_counts.get(&letter).copied().unwrap_or(0);
                let already_placed = placed.get(&letter).copied().unwrap_or(0);
                let available = in_guess.min(in_secret).saturating_sub(already_placed);
                (available > 0).then_some((letter, available))
            })
            .collect();

        // Second pass: hand out the leftovers left to right
        let mut remaining = present_counts.clone();
        for (i, &g) in guess.chars().iter().enumerate() {
            if results[i] == LetterResult::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                results[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        let mut absent_letters: Vec<u8> = guess_counts
            .keys()
            .copied()
            .filter(|letter| !secret_counts.contains_key(letter))
            .collect();
        absent_letters.sort_unstable();

        let evaluation = Self {
            results,
            correct_letters,
            present_counts,
            absent_letters,
        };
        log::debug!("evaluated {guess} -> {evaluation:?}");
        evaluation
    }

    /// Per-position results, in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.results
    }

    /// Letters found in their exact position, in guess order
    #[inline]
    #[must_use]
    pub fn correct_letters(&self) -> &[u8] {
        &self.correct_letters
    }

    /// How many occurrences of `letter` are available for Present
    #[inline]
    #[must_use]
    pub fn present_count(&self, letter: u8) -> u8 {
        self.present_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Letters with at least one Present occurrence available
    pub fn present_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.present_counts.keys().copied()
    }

    /// Guess letters that never occur in the secret, sorted
    #[inline]
    #[must_use]
    pub fn absent_letters(&self) -> &[u8] {
        &self.absent_letters
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.results.iter().all(|&r| r == LetterResult::Correct)
    }
}
