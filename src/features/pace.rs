// Speaking pace - words per minute over a fixed analysis window

use crate::config::{OPTIMAL_PACE_MAX_WPM, OPTIMAL_PACE_MIN_WPM};

/// Where a pace falls relative to the optimal 120-180 WPM band.
/// Used for reporting and recommendations only, never for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceBand {
    Slow,
    Optimal,
    Fast,
}

/// Words per minute given a word count and the analysis window.
///
/// The window is a fixed time base (default 10 s) standing in for a true
/// elapsed-time delta, which continuous recognizers do not reliably give us.
pub fn words_per_minute(word_count: usize, window_secs: f64) -> f64 {
    if window_secs <= 0.0 {
        return 0.0;
    }
    word_count as f64 / window_secs * 60.0
}

pub fn pace_band(wpm: f64) -> PaceBand {
    if wpm < OPTIMAL_PACE_MIN_WPM {
        PaceBand::Slow
    } else if wpm > OPTIMAL_PACE_MAX_WPM {
        PaceBand::Fast
    } else {
        PaceBand::Optimal
    }
}

#[cfg(test)]
#[path = "pace_test.rs"]
mod tests;
