//! Worble - CLI
//!
//! Plays one round of the word-guessing game in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use worble::{
    commands::{PlayConfig, run_play},
    store::ScoreLog,
};

#[derive(Parser)]
#[command(
    name = "worble",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// Newline-delimited list of accepted guesses (default: embedded list)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Newline-delimited list the secret is drawn from (default: embedded list)
    #[arg(long)]
    answers: Option<PathBuf>,

    /// Score log location (default: <data dir>/worble/scores.jsonl)
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let config = PlayConfig {
        words: cli.words,
        answers: cli.answers,
        scores: cli.scores.unwrap_or_else(ScoreLog::default_path),
    };

    run_play(&config)
}
