//! Guess validation against the list of accepted words

use crate::core::{WORD_LENGTH, Word};
use crate::errors::GuessError;

/// Sorted, de-duplicated list of every accepted guess
///
/// Membership is an exact binary search over the sorted list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Entries are lowercased, sorted and de-duplicated.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(words);
        dictionary
    }

    /// Add more words, keeping the list sorted
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.words.retain(|w| !w.is_empty());
        self.words.sort_unstable();
        self.words.dedup();
    }

    /// Exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// Turn raw player input into a guess
    ///
    /// The input is trimmed and lowercased, then must have the right length
    /// and appear in the list.
    ///
    /// # Errors
    /// Returns `GuessError` when the input has the wrong length or is not an
    /// accepted word.
    ///
    /// # Examples
    /// ```
    /// use worble::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "react"]);
    /// assert_eq!(dictionary.validate(" CRANE\n").unwrap().text(), "crane");
    /// assert!(dictionary.validate("slate").is_err());
    /// ```
    pub fn validate(&self, input: &str) -> Result<Word, GuessError> {
        let guess = input.trim().to_lowercase();

        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::WrongLength(len));
        }
        if !self.contains(&guess) {
            return Err(GuessError::NotInWordList(guess));
        }

        Ok(Word::new(guess)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
