//! A single game from first guess to win or loss

use crate::core::{Evaluation, KnowledgeTracker, Word};
use crate::errors::GameError;

/// Maximum number of guesses per game
pub const MAX_GUESSES: u8 = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// Secret found on the given (1-indexed) attempt
    Won { attempts: u8 },
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess with its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// State of one game: secret, past guesses and keyboard knowledge
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    guesses: Vec<GuessRecord>,
    knowledge: KnowledgeTracker,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        log::info!("new game started");
        log::debug!("secret is {secret}");
        Self {
            secret,
            guesses: Vec::with_capacity(usize::from(MAX_GUESSES)),
            knowledge: KnowledgeTracker::new(),
            state: GameState::InProgress,
        }
    }

    /// Evaluate an already validated guess and advance the game
    ///
    /// # Errors
    /// Returns `GameError::AlreadyFinished` if the game was already won or lost.
    pub fn submit(&mut self, guess: Word) -> Result<GameState, GameError> {
        if self.state.is_finished() {
            return Err(GameError::AlreadyFinished);
        }

        let attempt = self.attempt();
        let evaluation = Evaluation::calculate(&guess, &self.secret);
        self.knowledge.apply(&evaluation);

        self.state = if evaluation.is_win() {
            GameState::Won { attempts: attempt }
        } else if attempt >= MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        self.guesses.push(GuessRecord {
            word: guess,
            evaluation,
        });
        log::info!("attempt {attempt}/{MAX_GUESSES}: {:?}", self.state);

        Ok(self.state)
    }

    /// Current attempt number, 1-indexed
    ///
    /// Once the game is over this is the number of guesses made.
    #[must_use]
    pub fn attempt(&self) -> u8 {
        let made = self.guesses.len() as u8;
        if self.state.is_finished() {
            made
        } else {
            made + 1
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeTracker {
        &self.knowledge
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterKnowledge, LetterResult};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn session_starts_in_progress() {
        let session = GameSession::new(word("crane"));
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempt(), 1);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn session_win_on_second_guess() {
        let mut session = GameSession::new(word("crane"));

        assert_eq!(session.submit(word("react")), Ok(GameState::InProgress));
        assert_eq!(session.attempt(), 2);

        assert_eq!(
            session.submit(word("crane")),
            Ok(GameState::Won { attempts: 2 })
        );
        assert_eq!(session.attempt(), 2);
        assert_eq!(session.guesses().len(), 2);
        assert_eq!(
            session.guesses()[1].evaluation.results(),
            &[LetterResult::Correct; 5]
        );
        assert_eq!(session.knowledge().get(b't'), LetterKnowledge::Absent);
        assert_eq!(session.knowledge().get(b'r'), LetterKnowledge::Correct);
    }

    #[test]
    fn session_lost_after_six_misses() {
        let mut session = GameSession::new(word("crane"));

        for _ in 1..MAX_GUESSES {
            assert_eq!(session.submit(word("sheep")), Ok(GameState::InProgress));
        }
        assert_eq!(session.submit(word("sheep")), Ok(GameState::Lost));
        assert_eq!(session.attempt(), MAX_GUESSES);
    }

    #[test]
    fn session_win_on_last_guess() {
        let mut session = GameSession::new(word("crane"));

        for _ in 1..MAX_GUESSES {
            session.submit(word("sheep")).unwrap();
        }
        assert_eq!(
            session.submit(word("crane")),
            Ok(GameState::Won { attempts: 6 })
        );
    }

    #[test]
    fn session_rejects_guess_after_finish() {
        let mut session = GameSession::new(word("crane"));
        session.submit(word("crane")).unwrap();

        assert_eq!(
            session.submit(word("react")),
            Err(GameError::AlreadyFinished)
        );
        assert_eq!(session.guesses().len(), 1);
    }
}
