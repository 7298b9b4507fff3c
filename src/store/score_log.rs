//! Append-only log of finished, won games
//!
//! Each won game becomes one JSON line `{"id": N, "guesses": G}`. Rows are
//! buffered and written out by `commit`, which also runs on drop, so every
//! exit path that unwinds through the owner flushes pending rows.

use crate::errors::StoreError;
use crate::game::MAX_GUESSES;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "worble";
const FILE_NAME: &str = "scores.jsonl";
const FALLBACK_FILE_NAME: &str = "worble.scores.jsonl";

/// One recorded game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub id: u64,
    pub guesses: u8,
}

/// File-backed score log
#[derive(Debug)]
pub struct ScoreLog {
    path: PathBuf,
    rows: Vec<ScoreRow>,
    writer: BufWriter<File>,
    next_id: u64,
}

impl ScoreLog {
    /// Default location: the platform data directory, or the working
    /// directory when there is none
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from(FALLBACK_FILE_NAME),
            |dir| dir.join(APP_DIR).join(FILE_NAME),
        )
    }

    /// Open the log, creating it (and its parent directories) if absent
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file cannot be created, read or
    /// opened for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;
        let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;

        let rows = parse_rows(&content);
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        log::info!("opened score log {} with {} rows", path.display(), rows.len());

        Ok(Self {
            path,
            rows,
            writer: BufWriter::new(file),
            next_id,
        })
    }

    /// Append a won game that took `guesses` attempts
    ///
    /// # Errors
    /// Returns `StoreError::InvalidGuessCount` for counts outside 1..=6, or
    /// an encoding / I/O error if the row cannot be buffered.
    pub fn record(&mut self, guesses: u8) -> Result<ScoreRow, StoreError> {
        if !(1..=MAX_GUESSES).contains(&guesses) {
            return Err(StoreError::InvalidGuessCount(guesses));
        }

        let row = ScoreRow {
            id: self.next_id,
            guesses,
        };
        serde_json::to_writer(&mut self.writer, &row)?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| StoreError::io(&self.path, e))?;

        self.next_id += 1;
        self.rows.push(row);
        log::info!("recorded score row {row:?}");
        Ok(row)
    }

    /// Guess counts of every recorded game, oldest first
    #[must_use]
    pub fn guess_counts(&self) -> Vec<u8> {
        self.rows.iter().map(|row| row.guesses).collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows and sync them to disk
    ///
    /// # Errors
    /// Returns `StoreError::Io` if flushing or syncing fails.
    pub fn commit(&mut self) -> Result<(), StoreError> {
        self.writer
            .flush()
            .map_err(|e| StoreError::io(&self.path, e))?;
        self.writer
            .get_ref()
            .sync_all()
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

impl Drop for ScoreLog {
    fn drop(&mut self) {
        if let Err(e) = self.commit() {
            log::error!("failed to commit score log: {e}");
        }
    }
}

fn parse_rows(content: &str) -> Vec<ScoreRow> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(line_no, line)| {
            serde_json::from_str::<ScoreRow>(line)
                .inspect_err(|e| log::warn!("skipping score row {}: {e}", line_no + 1))
                .ok()
        })
        .collect()
}
