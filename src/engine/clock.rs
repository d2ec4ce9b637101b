//! Logical time and scheduled tasks.
//!
//! The engine never reads the wall clock. Adapters feed elapsed
//! milliseconds through `GameState::advance_time`, and the clock tracks
//! the two deadlines the game cares about: the next whole-second timer
//! tick and (while a mismatch is pending) the one-shot unflip.
//!
//! Scheduled tasks carry the round generation they were created in; a
//! restart bumps the generation, so a task from a previous round can
//! never mutate the current board.

/// Milliseconds between timer ticks.
pub(crate) const TICK_MS: u64 = 1000;

/// Logical clock for a round.
#[derive(Clone, Debug)]
pub(crate) struct GameClock {
    now_ms: u64,
    next_tick_ms: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_tick_ms: TICK_MS,
        }
    }

    /// Reset to the start of a round.
    pub fn reset(&mut self) {
        self.now_ms = 0;
        self.next_tick_ms = TICK_MS;
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn next_tick_ms(&self) -> u64 {
        self.next_tick_ms
    }

    /// Move the clock forward; never moves backwards.
    pub fn advance_to(&mut self, at_ms: u64) {
        self.now_ms = self.now_ms.max(at_ms);
    }

    /// Schedule the tick after the one that just fired.
    pub fn schedule_next_tick(&mut self) {
        self.next_tick_ms += TICK_MS;
    }
}

/// A scheduled unflip of a mismatched pair.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingUnflip {
    pub first: usize,
    pub second: usize,
    pub due_at_ms: u64,
    /// Round generation the task belongs to; stale tasks are dropped.
    pub round: u64,
}
