//! Round phases and the end-of-round message selector.

use serde::{Deserialize, Serialize};

/// Phase of the current round.
///
/// `Playing` is the initial phase. `Won` and `Lost` are terminal: no
/// selections are accepted until the game is restarted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The round is in progress; selections and timer ticks are accepted.
    Playing,
    /// All pairs were matched within the guess budget.
    Won,
    /// The guess budget was exhausted.
    Lost,
}

impl GamePhase {
    /// Check if the round has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Selector for the end-of-round message shown by adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndMessage {
    /// The round is still in progress; no message.
    None,
    /// Victory message.
    Won,
    /// Defeat message.
    Lost,
}

impl EndMessage {
    /// The message selector for a phase.
    #[must_use]
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Playing => EndMessage::None,
            GamePhase::Won => EndMessage::Won,
            GamePhase::Lost => EndMessage::Lost,
        }
    }

    /// Default message text, if the round has ended.
    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self {
            EndMessage::None => None,
            EndMessage::Won => Some("You did it! Here's how you got on:"),
            EndMessage::Lost => Some("Game over. You reached the maximum number of guesses."),
        }
    }
}
