//! Deck construction and shuffling.
//!
//! ```
//! use concentration::{deck, GameRng, Symbol};
//!
//! let alphabet: Vec<Symbol> = (0u16..8).map(Symbol::new).collect();
//! let deck = deck::build_deck(&alphabet).unwrap();
//! assert_eq!(deck.len(), 16);
//!
//! let mut rng = GameRng::new(42);
//! let shuffled = deck::shuffled(&deck, &mut rng);
//! assert_eq!(shuffled.len(), 16);
//! ```

use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

use super::symbol::Symbol;

/// Duplicate each alphabet symbol once, producing a deck of 2n symbols.
///
/// The alphabet must be non-empty; an empty alphabet is a configuration
/// error, not a valid degenerate board.
pub fn build_deck(alphabet: &[Symbol]) -> Result<Vec<Symbol>, ConfigError> {
    if alphabet.is_empty() {
        return Err(ConfigError::EmptyAlphabet);
    }

    let mut deck = Vec::with_capacity(alphabet.len() * 2);
    for &symbol in alphabet {
        deck.push(symbol);
        deck.push(symbol);
    }
    Ok(deck)
}

/// Return a uniformly random permutation of `deck` without mutating it.
///
/// Fisher-Yates: for each index i from the last down to 1, pick a uniform
/// j in [0, i] and swap. Every permutation is equally likely given a
/// uniform source.
#[must_use]
pub fn shuffled(deck: &[Symbol], rng: &mut GameRng) -> Vec<Symbol> {
    let mut cards = deck.to_vec();
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        cards.swap(i, j);
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet(n: u16) -> Vec<Symbol> {
        (0..n).map(Symbol::new).collect()
    }

    #[test]
    fn test_build_deck_duplicates_each_symbol() {
        let deck = build_deck(&alphabet(8)).unwrap();

        assert_eq!(deck.len(), 16);
        for symbol in alphabet(8) {
            assert_eq!(deck.iter().filter(|&&s| s == symbol).count(), 2);
        }
    }

    #[test]
    fn test_build_deck_single_pair() {
        let deck = build_deck(&alphabet(1)).unwrap();
        assert_eq!(deck, vec![Symbol::new(0), Symbol::new(0)]);
    }

    #[test]
    fn test_build_deck_rejects_empty_alphabet() {
        assert_eq!(build_deck(&[]), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let deck = build_deck(&alphabet(8)).unwrap();
        let mut rng = GameRng::new(42);

        let out = shuffled(&deck, &mut rng);

        let mut sorted_in = deck.clone();
        let mut sorted_out = out.clone();
        sorted_in.sort_by_key(|s| s.raw());
        sorted_out.sort_by_key(|s| s.raw());

        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn test_shuffled_does_not_mutate_input() {
        let deck = build_deck(&alphabet(8)).unwrap();
        let before = deck.clone();
        let mut rng = GameRng::new(42);

        let _ = shuffled(&deck, &mut rng);

        assert_eq!(deck, before);
    }

    #[test]
    fn test_shuffled_deterministic_per_seed() {
        let deck = build_deck(&alphabet(8)).unwrap();

        let a = shuffled(&deck, &mut GameRng::new(7));
        let b = shuffled(&deck, &mut GameRng::new(7));
        let c = shuffled(&deck, &mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffled_roughly_uniform_per_position() {
        // Each of the 4 symbols appears twice in an 8-card deck, so any
        // given symbol lands on position 0 with probability 1/4. Over
        // 2000 independent shuffles the count should sit near 500;
        // the bounds below are ~7 standard deviations wide.
        let deck = build_deck(&alphabet(4)).unwrap();
        let trials = 2000;

        let mut counts = [0u32; 4];
        for seed in 0..trials {
            let mut rng = GameRng::new(seed);
            let out = shuffled(&deck, &mut rng);
            counts[out[0].raw() as usize] += 1;
        }

        for &count in &counts {
            assert!((350..=650).contains(&count), "position-0 count {count} outside bounds");
        }
    }

    #[test]
    fn test_shuffled_handles_trivial_decks() {
        let mut rng = GameRng::new(1);

        assert!(shuffled(&[], &mut rng).is_empty());

        let single = [Symbol::new(0)];
        assert_eq!(shuffled(&single, &mut rng), vec![Symbol::new(0)]);
    }
}
