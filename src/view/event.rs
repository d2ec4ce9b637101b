//! Transition notifications.

use serde::{Deserialize, Serialize};

use crate::core::stats::RoundStats;
use crate::deck::Symbol;

/// A notification emitted by the state machine after a transition.
///
/// Adapters receive these from the input hooks (`select_card`, `restart`,
/// `advance_time`) and mirror them into display updates. The full event
/// sequence of a game is also kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began; the full board should be (re)rendered face-down.
    RoundStarted {
        /// Distinct pairs on the new board.
        pair_count: u32,
        /// Incorrect guesses allowed this round.
        max_guesses: u32,
    },

    /// A card was turned face-up.
    CardRevealed { position: usize, symbol: Symbol },

    /// A pair comparison completed (second card of a pair was flipped).
    MoveCompleted { move_count: u32 },

    /// Two revealed cards shared a symbol and are now matched.
    PairMatched {
        first: usize,
        second: usize,
        symbol: Symbol,
    },

    /// Two revealed cards differed; a guess was consumed.
    PairMismatched {
        first: usize,
        second: usize,
        remaining_guesses: u32,
    },

    /// The delayed unflip fired; both cards are face-down again.
    CardsHidden { first: usize, second: usize },

    /// One second of play elapsed.
    TimerTick { elapsed_seconds: u32 },

    /// All pairs were matched.
    Won { stats: RoundStats },

    /// The guess budget ran out.
    Lost { stats: RoundStats },
}
