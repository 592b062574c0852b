//! Playing cards.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Unicode suit symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank, two through ace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Rank {
    /// 2
    #[strum(to_string = "2")]
    Two,
    /// 3
    #[strum(to_string = "3")]
    Three,
    /// 4
    #[strum(to_string = "4")]
    Four,
    /// 5
    #[strum(to_string = "5")]
    Five,
    /// 6
    #[strum(to_string = "6")]
    Six,
    /// 7
    #[strum(to_string = "7")]
    Seven,
    /// 8
    #[strum(to_string = "8")]
    Eight,
    /// 9
    #[strum(to_string = "9")]
    Nine,
    /// 10
    #[strum(to_string = "10")]
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Points the rank is worth, counting an ace high (11).
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Returns true for the ace.
    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
}

/// A playing card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Card {
    /// Rank.
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
        let total: u32 = Rank::iter().map(Rank::value).sum();
        assert_eq!(total, 95);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    }
}
