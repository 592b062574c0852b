//! Hands and hand valuation.

use super::card::Card;
use crate::seat::{Outcome, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Value above which a hand is bust.
pub const BUST_LIMIT: u32 = 21;

/// Value of a set of cards.
///
/// Aces count 11 unless that would exceed `bust_limit`, in which case they
/// are re-counted as 1 one at a time until the total fits or no high aces
/// remain.
pub fn hand_value(cards: &[Card], bust_limit: u32) -> u32 {
    let mut total: u32 = cards.iter().map(|card| card.rank.value()).sum();
    let mut high_aces = cards.iter().filter(|card| card.rank.is_ace()).count();
    while total > bust_limit && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    total
}

/// Returns true if the cards are worth more than `bust_limit`.
pub fn is_busted(cards: &[Card], bust_limit: u32) -> bool {
    hand_value(cards, bust_limit) > bust_limit
}

/// Decides a finished hand, seat A holding the player's cards and seat B
/// the dealer's.
///
/// A busted player loses even if the dealer also busts.
#[instrument(skip(player, dealer))]
pub fn compare_hands(player: &[Card], dealer: &[Card], bust_limit: u32) -> Outcome {
    if is_busted(player, bust_limit) {
        return Outcome::Win(Seat::B);
    }
    if is_busted(dealer, bust_limit) {
        return Outcome::Win(Seat::A);
    }
    let (p, d) = (hand_value(player, bust_limit), hand_value(dealer, bust_limit));
    match p.cmp(&d) {
        std::cmp::Ordering::Greater => Outcome::Win(Seat::A),
        std::cmp::Ordering::Less => Outcome::Win(Seat::B),
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Cards held by one participant during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in the order dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Value under the given bust limit.
    pub fn value(&self, bust_limit: u32) -> u32 {
        hand_value(&self.cards, bust_limit)
    }

    /// Whether the hand is worth more than `bust_limit`.
    pub fn is_busted(&self, bust_limit: u32) -> bool {
        is_busted(&self.cards, bust_limit)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true before anything has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}", names.join(", "))
    }
}
