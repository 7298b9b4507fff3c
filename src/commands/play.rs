//! Play one game in the terminal
//!
//! The loop reads guesses line by line, reprompts on invalid input, and
//! redraws the board after every accepted guess. Wins are recorded in the
//! score log and the histogram of past wins is printed at the end.

use crate::core::Word;
use crate::game::{GameSession, GameState, MAX_GUESSES};
use crate::output::{print_game, print_histogram, print_message};
use crate::store::{Histogram, ScoreLog};
use crate::wordlists::{
    ANSWERS, Dictionary, choose_secret, embedded_dictionary,
    loader::{load_from_file, words_from_slice},
};
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Configuration for a game
pub struct PlayConfig {
    /// Custom guess list; the embedded list is used when absent
    pub words: Option<PathBuf>,
    /// Custom secret list; the embedded list is used when absent
    pub answers: Option<PathBuf>,
    pub scores: PathBuf,
}

/// Guess dictionary and secret candidates
pub struct WordLists {
    pub dictionary: Dictionary,
    pub answers: Vec<Word>,
}

/// Load the word lists, falling back to the embedded ones
///
/// Secrets are always added to the dictionary so they can be guessed.
///
/// # Errors
///
/// Returns an error if a custom list cannot be read.
pub fn load_wordlists(words: Option<&Path>, answers: Option<&Path>) -> Result<WordLists> {
    let answers = match answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read answer list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };

    let mut dictionary = match words {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Dictionary::new(words.iter().map(Word::text))
        }
        None => embedded_dictionary(),
    };
    dictionary.extend(answers.iter().map(Word::text));

    log::info!(
        "{} guessable words, {} possible secrets",
        dictionary.len(),
        answers.len()
    );
    Ok(WordLists {
        dictionary,
        answers,
    })
}

/// Drive a session to completion with guesses read from `input`
///
/// # Errors
///
/// Returns an error on I/O failure or if `input` ends before the game does.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    dictionary: &Dictionary,
    input: &mut R,
    out: &mut W,
) -> Result<GameState> {
    print_game(out, session)?;

    while !session.state().is_finished() {
        let guess = read_guess(session.attempt(), dictionary, input, out)?;
        session.submit(guess)?;
        print_game(out, session)?;
    }

    Ok(session.state())
}

fn read_guess<R: BufRead, W: Write>(
    attempt: u8,
    dictionary: &Dictionary,
    input: &mut R,
    out: &mut W,
) -> Result<Word> {
    loop {
        write!(out, "{attempt}/{MAX_GUESSES} > ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        match dictionary.validate(&line) {
            Ok(word) => return Ok(word),
            Err(e) => {
                log::debug!("rejected guess: {e}");
                writeln!(out, "Not a valid word")?;
            }
        }
    }
}

/// Record a win, print the closing message and the histogram
///
/// # Errors
///
/// Returns an error if the game is unfinished or the score cannot be saved.
pub fn finish_game<W: Write>(
    session: &GameSession,
    scores: &mut ScoreLog,
    out: &mut W,
) -> Result<()> {
    match session.state() {
        GameState::Won { attempts } => {
            scores.record(attempts)?;
            scores.commit()?;
            print_message(
                out,
                &format!("Congratulations! Word guessed in {attempts} guesses"),
            )?;
        }
        GameState::Lost => {
            print_message(out, &format!("The word was: {}", session.secret()))?;
            print_message(out, "Better luck next time.")?;
        }
        GameState::InProgress => bail!("cannot finish a game that is still in progress"),
    }

    print_histogram(out, &Histogram::from_guess_counts(&scores.guess_counts()))?;
    Ok(())
}

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word lists or score log cannot be opened, or on
/// terminal I/O failure.
pub fn run_play(config: &PlayConfig) -> Result<()> {
    let lists = load_wordlists(config.words.as_deref(), config.answers.as_deref())?;
    let mut scores = ScoreLog::open(&config.scores)
        .with_context(|| format!("failed to open score log {}", config.scores.display()))?;

    let secret = choose_secret(&lists.answers, &mut rand::rng())
        .context("answer list is empty")?
        .clone();
    let mut session = GameSession::new(secret);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    run_game(&mut session, &lists.dictionary, &mut input, &mut out)?;
    finish_game(&session, &mut scores, &mut out)
}
