//! # concentration
//!
//! A presentation-agnostic engine for the single-player memory-matching
//! (concentration) card game.
//!
//! ## Design Principles
//!
//! 1. **Logic Only**: No rendering, DOM, or animation. Adapters forward
//!    user input and render from events and snapshots.
//!
//! 2. **Explicit Time**: The engine never reads the wall clock. Adapters
//!    feed elapsed milliseconds through `advance_time`, which makes the
//!    1-second timer and the mismatch-unflip delay deterministic.
//!
//! 3. **Owned State**: One `GameState` object holds the board, selection,
//!    statistics, RNG, and scheduled tasks. All mutation goes through its
//!    methods; scheduled tasks are invalidated on restart.
//!
//! ## Gameplay
//!
//! Cards are dealt face-down in shuffled pairs. Selecting two cards with
//! the same symbol matches them permanently; a mismatch consumes one of
//! the limited guesses and flips both cards back after a short delay.
//! Matching every pair wins the round; running out of guesses loses it.
//!
//! ```
//! use concentration::{GameConfig, GamePhase, GameState};
//!
//! let config = GameConfig::classic().with_seed(42);
//! let mut game = GameState::new(config).expect("valid config");
//!
//! // The adapter forwards a click on card 0, then a second of real time.
//! game.select_card(0);
//! game.advance_time(1000);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.phase, GamePhase::Playing);
//! assert_eq!(snapshot.stats.elapsed_seconds, 1);
//! assert_eq!(snapshot.stats.elapsed_display(), "00:01");
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, round statistics, phases
//! - `deck`: Symbols, pair duplication, Fisher-Yates shuffle
//! - `board`: Cards and the tableau
//! - `engine`: The state machine, logical clock, and scheduled tasks
//! - `view`: Events and snapshots for presentation adapters

pub mod board;
pub mod core;
pub mod deck;
pub mod engine;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EndMessage, GameConfig, GamePhase, GameRng, RoundStats, SymbolConfig,
    DEFAULT_MAX_GUESSES, DEFAULT_UNFLIP_DELAY_MS,
};

pub use crate::board::{Board, Card};

pub use crate::deck::{build_deck, shuffled, Symbol, SymbolRegistry};

pub use crate::engine::GameState;

pub use crate::view::{CardView, GameEvent, GameSnapshot};
