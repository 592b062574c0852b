//! The deck, dealt without replacement.

use super::card::{Card, Rank, Suit};
use crate::error::GameError;
use rand::RngCore;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Cards left to deal.
///
/// Cards are dealt from the top; `cards` is stored bottom-first so dealing
/// is a pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-then-rank order, unshuffled.
    pub fn standard() -> Self {
        let mut cards: Vec<Card> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        cards.reverse();
        Self { cards }
    }

    /// A standard deck shuffled with the injected RNG.
    #[instrument(skip(rng))]
    pub fn shuffled(rng: &mut dyn RngCore) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        debug!(cards = deck.cards.len(), "Deck shuffled");
        deck
    }

    /// A stacked deck; `top_first[0]` is dealt first.
    pub fn from_cards(top_first: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = top_first.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] when no cards remain.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_has_52_distinct_cards() {
        let mut deck = Deck::standard();
        let mut seen = HashSet::new();
        while let Ok(card) = deck.deal() {
            assert!(seen.insert(card));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_exhausted_deck_errors() {
        let mut deck = Deck::from_cards([Card::new(Rank::Two, Suit::Clubs)]);
        assert!(deck.deal().is_ok());
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn test_stacked_deck_deals_in_order() {
        let first = Card::new(Rank::Ace, Suit::Hearts);
        let second = Card::new(Rank::King, Suit::Spades);
        let mut deck = Deck::from_cards([first, second]);
        assert_eq!(deck.deal(), Ok(first));
        assert_eq!(deck.deal(), Ok(second));
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let a = Deck::shuffled(&mut seeded_rng(Some(5)));
        let b = Deck::shuffled(&mut seeded_rng(Some(5)));
        assert_eq!(a, b);
        assert_ne!(a, Deck::standard());
    }
}
