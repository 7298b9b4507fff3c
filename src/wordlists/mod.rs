//! Word lists: embedded defaults, file loading and secret selection

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick the secret uniformly at random from `answers`
///
/// Returns `None` if there are no answers to choose from.
pub fn choose_secret<'a, R: Rng + ?Sized>(answers: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    answers.choose(rng)
}

/// Dictionary built from the embedded guess list plus the embedded answers
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(ALLOWED.iter().chain(ANSWERS))
}
