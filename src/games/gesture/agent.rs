//! Computer opponent for gesture games.

use super::round::GestureRound;
use super::types::Gesture;
use crate::engine::{MoveSource, Round};
use crate::error::GameError;
use crate::seat::Seat;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the gestures in play.
#[derive(Debug, Clone)]
pub struct GestureAgent<G> {
    rng: G,
}

impl<G: Rng> GestureAgent<G> {
    /// Creates an agent drawing from `rng`.
    pub fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl<G: Rng> MoveSource<GestureRound> for GestureAgent<G> {
    #[instrument(skip(self, round))]
    fn select_move(&mut self, round: &GestureRound, seat: Seat) -> Result<Gesture, GameError> {
        let legal = round.legal_moves(seat);
        let choice = *legal.choose(&mut self.rng).ok_or(GameError::NoLegalMove)?;
        debug!(%choice, "Agent threw");
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gesture::{BeatsRelation, GestureRules};
    use crate::rng::seeded_rng;
    use std::collections::BTreeSet;

    #[test]
    fn test_agent_covers_every_gesture() {
        let rules = GestureRules::new(BeatsRelation::lizard_spock().unwrap());
        let round = GestureRound::start(&rules, Seat::B, &mut seeded_rng(Some(0))).unwrap();
        let mut agent = GestureAgent::new(seeded_rng(Some(3)));
        let seen: BTreeSet<Gesture> = (0..200)
            .map(|_| agent.select_move(&round, Seat::B).unwrap())
            .collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_agent_refuses_when_not_its_turn() {
        let rules = GestureRules::new(BeatsRelation::classic().unwrap());
        let round = GestureRound::start(&rules, Seat::A, &mut seeded_rng(Some(0))).unwrap();
        let mut agent = GestureAgent::new(seeded_rng(Some(3)));
        assert_eq!(
            agent.select_move(&round, Seat::B),
            Err(GameError::NoLegalMove)
        );
    }
}
