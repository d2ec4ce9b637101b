//! The game state machine.
//!
//! `GameState` owns the board, selection, statistics, RNG, and scheduled
//! tasks. All mutation goes through its methods; adapters drive it with
//! three input hooks (`select_card`, `restart`, `advance_time`) and render
//! from the returned events or a `snapshot()`.

pub mod game;

pub(crate) mod clock;
pub(crate) mod selection;

pub use game::GameState;
