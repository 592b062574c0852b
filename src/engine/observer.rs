//! Match events and the display collaborator that consumes them.

use super::game_match::Match;
use super::round::Round;
use crate::ledger::Ledger;
use crate::seat::{Outcome, Seat};

/// Something that happened during a match.
///
/// Messages sent from the match to whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent<M> {
    /// A fresh round began.
    RoundStarted {
        /// One-based round number.
        number: u32,
        /// Seat that opens the round.
        starter: Seat,
    },
    /// A seat moved.
    MoveMade {
        /// Seat that moved.
        seat: Seat,
        /// The move.
        mv: M,
    },
    /// The round resolved and the ledger was updated.
    RoundComplete(Outcome),
    /// The match was decided.
    MatchComplete(Option<Seat>),
}

/// Display collaborator.
///
/// Receives every event together with a read-only view of the match.
/// It has no way to alter core state.
pub trait Observer<R: Round, L: Ledger> {
    /// Called after each state-machine transition.
    fn notify(&mut self, event: &MatchEvent<R::Move>, state: &Match<R, L>);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl<R: Round, L: Ledger> Observer<R, L> for NullObserver {
    fn notify(&mut self, _event: &MatchEvent<R::Move>, _state: &Match<R, L>) {}
}

/// Observer that keeps every event, in order.
#[derive(Debug, Clone)]
pub struct EventLog<M> {
    events: Vec<MatchEvent<M>>,
}

impl<M> EventLog<M> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events.
    pub fn events(&self) -> &[MatchEvent<M>] {
        &self.events
    }
}

impl<M> Default for EventLog<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Round, L: Ledger> Observer<R, L> for EventLog<R::Move> {
    fn notify(&mut self, event: &MatchEvent<R::Move>, _state: &Match<R, L>) {
        self.events.push(event.clone());
    }
}
