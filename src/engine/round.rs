//! The contract every game's round implements.

use crate::error::GameError;
use crate::seat::{Outcome, Seat};
use rand::RngCore;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting for the given seat to move.
    AwaitingMove(Seat),
    /// Terminal; the outcome is final.
    Complete(Outcome),
}

impl RoundStatus {
    /// Returns true once the round has reached a terminal state.
    pub fn is_complete(&self) -> bool {
        matches!(self, RoundStatus::Complete(_))
    }
}

/// One round of a turn-based game.
///
/// A round owns its per-round state (board, deck, hands) and is discarded
/// once its outcome has been posted to the ledger.
pub trait Round: Sized + std::fmt::Debug {
    /// A single move.
    type Move: Copy + PartialEq + std::fmt::Debug + std::fmt::Display;

    /// Immutable rule tables injected into every round.
    type Rules: std::fmt::Debug;

    /// Creates a fresh round opened by `first`.
    ///
    /// # Errors
    ///
    /// Fails if the initial deal cannot be completed, or with
    /// [`GameError::Config`] if the game fixes its opener and `first` is
    /// not it.
    fn start(rules: &Self::Rules, first: Seat, rng: &mut dyn RngCore) -> Result<Self, GameError>;

    /// Current status of the round.
    fn status(&self) -> RoundStatus;

    /// Moves the seat may legally make right now.
    ///
    /// Empty when it is not the seat's turn or the round is over.
    fn legal_moves(&self, seat: Seat) -> Vec<Self::Move>;

    /// Applies a move for the seat.
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if the round is over, it is not the
    /// seat's turn, or the move is not legal.
    fn apply(&mut self, seat: Seat, mv: Self::Move) -> Result<(), GameError>;
}

/// Checks the shared preconditions for [`Round::apply`].
pub(crate) fn ensure_turn(status: RoundStatus, seat: Seat) -> Result<(), GameError> {
    match status {
        RoundStatus::Complete(_) => Err(GameError::RoundOver),
        RoundStatus::AwaitingMove(expected) if expected != seat => Err(GameError::WrongTurn(seat)),
        RoundStatus::AwaitingMove(_) => Ok(()),
    }
}
