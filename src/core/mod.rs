//! Core engine types: configuration, errors, RNG, round statistics, phases.
//!
//! This module contains the fundamental building blocks shared by the deck,
//! board, and state-machine subsystems. Adapters configure the engine via
//! `GameConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;
pub mod stats;

pub use config::{GameConfig, SymbolConfig, DEFAULT_MAX_GUESSES, DEFAULT_UNFLIP_DELAY_MS};
pub use error::ConfigError;
pub use phase::{EndMessage, GamePhase};
pub use rng::GameRng;
pub use stats::RoundStats;
