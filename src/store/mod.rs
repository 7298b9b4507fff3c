//! Score persistence and the past-results histogram

mod histogram;
mod score_log;

pub use histogram::{Histogram, MAX_BAR_WIDTH};
pub use score_log::{ScoreLog, ScoreRow};
