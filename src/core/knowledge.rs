//! Per-letter keyboard knowledge accumulated across guesses
//!
//! Each of the 26 letters starts Unknown and only ever gains information:
//! Unknown -> Present -> Correct, or Unknown -> Absent. Absent is reserved
//! for letters that do not occur in the secret at all, so it never competes
//! with Present or Correct for the same letter.

use super::Evaluation;

/// Number of letters tracked on the keyboard
pub const ALPHABET_SIZE: usize = 26;

/// What is known about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterKnowledge {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

/// Keyboard state for the whole alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeTracker {
    letters: [LetterKnowledge; ALPHABET_SIZE],
}

impl Default for KnowledgeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeTracker {
    /// Create a tracker with every letter Unknown
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [LetterKnowledge::Unknown; ALPHABET_SIZE],
        }
    }

    /// Current knowledge of `letter` (a-z)
    ///
    /// # Panics
    /// Panics if `letter` is not an ASCII lowercase letter
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterKnowledge {
        self.letters[Self::index(letter)]
    }

    /// Iterate over `(letter, knowledge)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterKnowledge)> + '_ {
        (b'a'..=b'z').zip(self.letters.iter().copied())
    }

    /// Fold one guess evaluation into the keyboard state
    ///
    /// Updates run in a fixed order: absent letters, then present letters,
    /// then placed letters, so a later rule can only raise what an earlier
    /// one set.
    pub fn apply(&mut self, evaluation: &Evaluation) {
        for &letter in evaluation.absent_letters() {
            self.mark_absent(letter);
        }
        for letter in evaluation.present_letters() {
            self.mark_present(letter);
        }
        for &letter in evaluation.correct_letters() {
            self.mark_correct(letter);
        }
        log::debug!("keyboard after guess: {:?}", self.letters);
    }

    fn mark_absent(&mut self, letter: u8) {
        let slot = &mut self.letters[Self::index(letter)];
        match *slot {
            LetterKnowledge::Unknown => *slot = LetterKnowledge::Absent,
            LetterKnowledge::Absent => {}
            known => log::warn!(
                "ignoring absent mark for '{}' already known {known:?}",
                letter as char
            ),
        }
    }

    fn mark_present(&mut self, letter: u8) {
        let slot = &mut self.letters[Self::index(letter)];
        if *slot == LetterKnowledge::Unknown {
            *slot = LetterKnowledge::Present;
        }
    }

    fn mark_correct(&mut self, letter: u8) {
        self.letters[Self::index(letter)] = LetterKnowledge::Correct;
    }

    fn index(letter: u8) -> usize {
        assert!(letter.is_ascii_lowercase(), "not a lowercase letter: {letter}");
        usize::from(letter - b'a')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use LetterKnowledge::{Absent, Correct, Present, Unknown};
    use proptest::prelude::*;

    fn apply(tracker: &mut KnowledgeTracker, guess: &str, secret: &str) {
        let evaluation =
            Evaluation::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap());
        tracker.apply(&evaluation);
    }

    #[test]
    fn tracker_starts_unknown() {
        let tracker = KnowledgeTracker::new();
        assert!(tracker.iter().all(|(_, k)| k == Unknown));
        assert_eq!(tracker.iter().count(), ALPHABET_SIZE);
    }

    #[test]
    fn tracker_marks_each_class() {
        let mut tracker = KnowledgeTracker::new();
        apply(&mut tracker, "react", "crane");

        assert_eq!(tracker.get(b'a'), Correct);
        assert_eq!(tracker.get(b'r'), Present);
        assert_eq!(tracker.get(b'e'), Present);
        assert_eq!(tracker.get(b'c'), Present);
        assert_eq!(tracker.get(b't'), Absent);
        assert_eq!(tracker.get(b'n'), Unknown);
    }

    #[test]
    fn tracker_present_upgrades_to_correct() {
        let mut tracker = KnowledgeTracker::new();
        apply(&mut tracker, "react", "crane");
        apply(&mut tracker, "crane", "crane");

        for letter in b"crane" {
            assert_eq!(tracker.get(*letter), Correct);
        }
        assert_eq!(tracker.get(b't'), Absent);
    }

    #[test]
    fn tracker_correct_never_downgrades_to_present() {
        let mut tracker = KnowledgeTracker::new();
        // E placed at the end, then guessed in a misplaced spot
        apply(&mut tracker, "crane", "glare");
        assert_eq!(tracker.get(b'e'), Correct);

        apply(&mut tracker, "exalt", "glare");
        assert_eq!(tracker.get(b'e'), Correct);
        assert_eq!(tracker.get(b'l'), Present);
    }

    #[test]
    fn tracker_surplus_occurrence_keeps_present() {
        let mut tracker = KnowledgeTracker::new();
        apply(&mut tracker, "react", "sheep");
        assert_eq!(tracker.get(b'e'), Present);

        // Third E of EERIE has nothing left to claim; E stays Present
        apply(&mut tracker, "eerie", "sheep");
        assert_eq!(tracker.get(b'e'), Present);
        assert_eq!(tracker.get(b'i'), Absent);
    }

    #[test]
    fn tracker_fully_placed_letter_reaches_correct() {
        let mut tracker = KnowledgeTracker::new();
        // Both E's placed: no Present budget, but letter is Correct
        apply(&mut tracker, "speed", "creep");
        assert_eq!(tracker.get(b'e'), Correct);
        assert_eq!(tracker.get(b'p'), Present);
        assert_eq!(tracker.get(b's'), Absent);
    }

    fn rank(knowledge: LetterKnowledge) -> u8 {
        match knowledge {
            Unknown => 0,
            Absent | Present => 1,
            Correct => 2,
        }
    }

    proptest! {
        #[test]
        fn knowledge_only_moves_forward(
            secret in "[a-h]{5}",
            guesses in prop::collection::vec("[a-h]{5}", 1..8),
        ) {
            let secret = Word::new(secret).unwrap();
            let mut tracker = KnowledgeTracker::new();

            for guess in guesses {
                let before = tracker.clone();
                let guess = Word::new(guess).unwrap();
                tracker.apply(&Evaluation::calculate(&guess, &secret));

                for ((letter, old), (_, new)) in before.iter().zip(tracker.iter()) {
                    prop_assert!(rank(new) >= rank(old));
                    if old == Correct {
                        prop_assert_eq!(new, Correct);
                    }
                    if old == Absent {
                        prop_assert_eq!(new, Absent);
                    }
                    prop_assert_eq!(new == Absent, old == Absent || (
                        guess.has_letter(letter) && !secret.has_letter(letter)
                    ));
                    if new == Absent {
                        prop_assert!(!secret.has_letter(letter));
                    }
                }
            }
        }
    }
}
