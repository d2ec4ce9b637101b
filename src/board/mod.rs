//! The tableau: an ordered, fixed-length sequence of cards.
//!
//! A `Board` is created from a shuffled deck at round start and mutated
//! only by the state machine. Its length is fixed for the duration of a
//! round: 2 x pair count.

pub mod card;

pub use card::Card;

use crate::deck::Symbol;

/// An ordered sequence of cards, fixed for the duration of a round.
#[derive(Clone, Debug)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a board from a shuffled deck, all cards face-down and
    /// unmatched. Card positions are deck indices.
    #[must_use]
    pub(crate) fn from_deck(deck: Vec<Symbol>) -> Self {
        Self {
            cards: deck
                .into_iter()
                .enumerate()
                .map(|(position, symbol)| Card::face_down(symbol, position))
                .collect(),
        }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the card at a position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub(crate) fn card_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    /// Positions of cards that are face-up but not yet matched.
    ///
    /// The state machine keeps this at 0, 1, or 2 entries at all times.
    #[must_use]
    pub fn face_up_unmatched(&self) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|card| card.is_face_up() && !card.is_matched())
            .map(Card::position)
            .collect()
    }

    /// Check if every card on the board has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}
