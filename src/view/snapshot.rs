//! State snapshots: what an adapter may observe.

use serde::{Deserialize, Serialize};

use crate::board::Card;
use crate::core::phase::{EndMessage, GamePhase};
use crate::core::stats::RoundStats;
use crate::deck::Symbol;

/// Adapter-visible view of a single card.
///
/// The symbol is present only while the card is face-up or matched;
/// face-down cards keep their symbol hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Index in the board sequence.
    pub position: usize,

    /// Is the card currently face-up?
    pub face_up: bool,

    /// Has the card been matched?
    pub matched: bool,

    /// The card's symbol, if visible.
    pub symbol: Option<Symbol>,
}

impl CardView {
    /// Build the visible view of a card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        let visible = card.is_face_up() || card.is_matched();
        Self {
            position: card.position(),
            face_up: card.is_face_up(),
            matched: card.is_matched(),
            symbol: visible.then(|| card.symbol()),
        }
    }
}

/// Complete observable state after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Per-card views in board order.
    pub cards: Vec<CardView>,

    /// Current round statistics.
    pub stats: RoundStats,

    /// Current phase.
    pub phase: GamePhase,

    /// Is the board rejecting selections (mismatch-unflip window)?
    pub locked: bool,

    /// End-of-round message selector.
    pub message: EndMessage,
}

impl GameSnapshot {
    /// Count of face-up, unmatched cards (always 0, 1, or 2).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.face_up && !card.matched)
            .count()
    }
}
