//! Game configuration.
//!
//! Adapters configure the engine at startup by providing:
//! - `SymbolConfig`: one entry per distinct pair symbol, with a display name
//! - `GameConfig`: symbol alphabet, guess budget, unflip delay, RNG seed
//!
//! The engine never hardcodes an alphabet; `GameConfig::classic()` provides
//! the reference configuration of 8 food pairs on a 4x4 board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::deck::Symbol;

/// Default guess budget: seven incorrect guesses lose the round.
pub const DEFAULT_MAX_GUESSES: u32 = 7;

/// Default delay before a mismatched pair is turned face-down again.
pub const DEFAULT_UNFLIP_DELAY_MS: u64 = 1000;

/// Configuration for a single pair symbol.
///
/// The engine treats symbols as opaque; the display name exists for
/// adapters and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// The opaque symbol identifier.
    pub symbol: Symbol,

    /// Human-readable name (for rendering/debugging).
    pub name: String,
}

impl SymbolConfig {
    /// Create a new symbol configuration.
    pub fn new(symbol: Symbol, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
        }
    }
}

/// Full game configuration.
///
/// ## Defaults
///
/// - `max_guesses`: 7
/// - `unflip_delay_ms`: 1000
/// - `seed`: `None` (a fresh entropy seed is drawn per game)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The pair alphabet. Each entry yields exactly two cards on the board.
    pub symbols: Vec<SymbolConfig>,

    /// Incorrect guesses allowed before the round is lost.
    pub max_guesses: u32,

    /// Delay before a mismatched pair flips back face-down.
    pub unflip_delay_ms: u64,

    /// RNG seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the given alphabet and default settings.
    #[must_use]
    pub fn new(symbols: Vec<SymbolConfig>) -> Self {
        Self {
            symbols,
            max_guesses: DEFAULT_MAX_GUESSES,
            unflip_delay_ms: DEFAULT_UNFLIP_DELAY_MS,
            seed: None,
        }
    }

    /// The classic configuration: 8 food pairs on a 4x4 board, 7 guesses.
    ///
    /// ```
    /// use concentration::GameConfig;
    ///
    /// let config = GameConfig::classic();
    /// assert_eq!(config.pair_count(), 8);
    /// assert!(config.validate().is_ok());
    /// ```
    #[must_use]
    pub fn classic() -> Self {
        const NAMES: [&str; 8] = [
            "apple",
            "carrot",
            "cheese",
            "lemon",
            "pizza",
            "hamburger",
            "ice-cream",
            "bacon",
        ];

        Self::new(
            NAMES
                .iter()
                .enumerate()
                .map(|(i, name)| SymbolConfig::new(Symbol::new(i as u16), *name))
                .collect(),
        )
    }

    /// Set the guess budget.
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Set the mismatch unflip delay in milliseconds.
    #[must_use]
    pub fn with_unflip_delay_ms(mut self, delay_ms: u64) -> Self {
        self.unflip_delay_ms = delay_ms;
        self
    }

    /// Pin the RNG seed for deterministic shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct pairs; the board holds twice as many cards.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// The symbol alphabet without display names.
    #[must_use]
    pub fn alphabet(&self) -> Vec<Symbol> {
        self.symbols.iter().map(|entry| entry.symbol).collect()
    }

    /// Validate the configuration.
    ///
    /// Rejects an empty alphabet, duplicate symbols, and a zero guess budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = FxHashSet::default();
        for entry in &self.symbols {
            if !seen.insert(entry.symbol) {
                return Err(ConfigError::DuplicateSymbol(entry.symbol));
            }
        }

        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }

        Ok(())
    }
}
