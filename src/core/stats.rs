//! Per-round statistics: moves, elapsed time, guesses, matched pairs.

use serde::{Deserialize, Serialize};

/// Observable statistics for the current round.
///
/// Reset to initial values on round start and restart.
///
/// ## Invariants
///
/// - `remaining_guesses` starts at the configured budget and never rises
/// - `matched_pairs` never exceeds the board's pair count
/// - `move_count` increments once per completed pair comparison, never on
///   the first card of a pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Completed pair comparisons.
    pub move_count: u32,

    /// Whole seconds elapsed while the round was in play.
    pub elapsed_seconds: u32,

    /// Incorrect guesses left before the round is lost.
    pub remaining_guesses: u32,

    /// Pairs matched so far.
    pub matched_pairs: u32,
}

impl RoundStats {
    /// Fresh statistics for a new round with the given guess budget.
    #[must_use]
    pub fn fresh(max_guesses: u32) -> Self {
        Self {
            move_count: 0,
            elapsed_seconds: 0,
            remaining_guesses: max_guesses,
            matched_pairs: 0,
        }
    }

    /// Elapsed time rendered as zero-padded `MM:SS`.
    ///
    /// Minutes are unbounded; an hour-long round renders as `"61:03"`,
    /// not truncated.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        let minutes = self.elapsed_seconds / 60;
        let seconds = self.elapsed_seconds % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}
