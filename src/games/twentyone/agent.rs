//! Fixed-threshold dealer.

use super::round::{TwentyOneAction, TwentyOneRound};
use crate::engine::{MoveSource, Round};
use crate::error::GameError;
use crate::seat::Seat;
use tracing::{debug, instrument};

/// Hits while the hand is worth less than the table's
/// [`dealer_stands_at`](super::TwentyOneRules) threshold, then stays.
///
/// Deterministic; no randomness is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerAgent;

impl DealerAgent {
    /// Decides for a hand worth `value` against a standing threshold.
    pub fn decide(value: u32, stands_at: u32) -> TwentyOneAction {
        if value < stands_at {
            TwentyOneAction::Hit
        } else {
            TwentyOneAction::Stay
        }
    }
}

impl MoveSource<TwentyOneRound> for DealerAgent {
    #[instrument(skip(self, round))]
    fn select_move(
        &mut self,
        round: &TwentyOneRound,
        seat: Seat,
    ) -> Result<TwentyOneAction, GameError> {
        if round.legal_moves(seat).is_empty() {
            return Err(GameError::NoLegalMove);
        }
        let value = round.value(seat);
        let action = Self::decide(value, *round.rules().dealer_stands_at());
        debug!(value, %action, "Dealer policy");
        Ok(action)
    }
}
