//! Participant identity and round outcomes.

use serde::{Deserialize, Serialize};

/// Stable identifier of a participant within a match.
///
/// Scores, purses and board markers are keyed by seat rather than by
/// display name. The human conventionally sits in seat A; in twenty-one,
/// A is the player and B the dealer.
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
    derive_more::Display,
)]
pub enum Seat {
    /// First seat.
    A,
    /// Second seat.
    B,
}

impl Seat {
    /// Both seats, in order.
    pub const BOTH: [Seat; 2] = [Seat::A, Seat::B];

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// Index of the seat into a two-element array.
    pub fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

/// Result of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given seat won the round.
    Win(Seat),
    /// Nobody won.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Win(seat) => Some(*seat),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(seat) => write!(f, "Seat {} wins", seat),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
