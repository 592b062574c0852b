//! Single-exchange round: each seat throws once.

use super::rules::{BeatsRelation, evaluate_gesture};
use super::types::Gesture;
use crate::engine::{Round, RoundStatus, ensure_turn};
use crate::error::GameError;
use crate::seat::{Outcome, Seat};
use rand::RngCore;
use tracing::{debug, instrument};

/// Rules for a gesture game.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct GestureRules {
    relation: BeatsRelation,
}

impl GestureRules {
    /// The beats relation in play.
    pub fn relation(&self) -> &BeatsRelation {
        &self.relation
    }
}

/// One exchange of gestures.
///
/// Both seats commit a gesture; neither is revealed until both are in, so
/// collecting them one after the other is equivalent to a simultaneous
/// throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureRound {
    relation: BeatsRelation,
    first: Seat,
    throws: [Option<Gesture>; 2],
    outcome: Option<Outcome>,
}

impl GestureRound {
    /// Both gestures, once the exchange is complete.
    pub fn revealed(&self) -> Option<(Gesture, Gesture)> {
        self.outcome?;
        Some((self.throws[0]?, self.throws[1]?))
    }

    /// Whether the seat has committed its gesture.
    pub fn has_thrown(&self, seat: Seat) -> bool {
        self.throws[seat.index()].is_some()
    }
}

impl Round for GestureRound {
    type Move = Gesture;
    type Rules = GestureRules;

    #[instrument(skip(rules, _rng))]
    fn start(
        rules: &GestureRules,
        first: Seat,
        _rng: &mut dyn RngCore,
    ) -> Result<Self, GameError> {
        Ok(Self {
            relation: rules.relation.clone(),
            first,
            throws: [None, None],
            outcome: None,
        })
    }

    fn status(&self) -> RoundStatus {
        if let Some(outcome) = self.outcome {
            return RoundStatus::Complete(outcome);
        }
        if self.has_thrown(self.first) {
            RoundStatus::AwaitingMove(self.first.opponent())
        } else {
            RoundStatus::AwaitingMove(self.first)
        }
    }

    fn legal_moves(&self, seat: Seat) -> Vec<Gesture> {
        match self.status() {
            RoundStatus::AwaitingMove(turn) if turn == seat => self.relation.gestures(),
            _ => Vec::new(),
        }
    }

    #[instrument(skip(self))]
    fn apply(&mut self, seat: Seat, mv: Gesture) -> Result<(), GameError> {
        ensure_turn(self.status(), seat)?;
        if !self.relation.gestures().contains(&mv) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }
        self.throws[seat.index()] = Some(mv);
        if let [Some(a), Some(b)] = self.throws {
            let outcome = evaluate_gesture(a, b, &self.relation);
            debug!(%a, %b, %outcome, "Exchange resolved");
            self.outcome = Some(outcome);
        }
        Ok(())
    }
}
