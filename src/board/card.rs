//! Cards: per-card flip and match state.

use serde::{Deserialize, Serialize};

use crate::deck::Symbol;

/// A single card on the board.
///
/// Mutation happens only through the state machine, which preserves the
/// invariants: a matched card is always face-up and never returns to the
/// face-down state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: Symbol,
    face_up: bool,
    matched: bool,
    position: usize,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub(crate) fn face_down(symbol: Symbol, position: usize) -> Self {
        Self {
            symbol,
            face_up: false,
            matched: false,
            position,
        }
    }

    /// The card's pair symbol.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Index of this card in the board sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Is the card currently face-up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has the card been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn hide(&mut self) {
        debug_assert!(!self.matched, "matched cards never return face-down");
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_down_initial_state() {
        let card = Card::face_down(Symbol::new(2), 5);

        assert_eq!(card.symbol(), Symbol::new(2));
        assert_eq!(card.position(), 5);
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut card = Card::face_down(Symbol::new(0), 0);

        card.reveal();
        assert!(card.is_face_up());

        card.hide();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_mark_matched_keeps_face_up() {
        let mut card = Card::face_down(Symbol::new(0), 0);

        card.reveal();
        card.mark_matched();

        assert!(card.is_matched());
        assert!(card.is_face_up());
    }
}
