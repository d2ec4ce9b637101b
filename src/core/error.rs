//! Setup-time error taxonomy.
//!
//! Errors exist only at configuration time. In-round anomalies (re-clicking
//! the pending card, clicking during the lock window, clicking a matched card
//! or after the round has ended) are deliberate silent no-ops, not errors.

use thiserror::Error;

use crate::deck::Symbol;

/// Errors raised when validating a `GameConfig`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The symbol alphabet has no entries; a board cannot be built.
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,

    /// The same symbol appears more than once in the alphabet.
    #[error("duplicate symbol {0} in alphabet")]
    DuplicateSymbol(Symbol),

    /// A guess budget of zero would lose the round before the first flip.
    #[error("max guesses must be at least 1")]
    ZeroGuesses,
}
