//! Participants and the move-selection capability.

use super::round::Round;
use crate::error::GameError;
use crate::seat::Seat;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// Anything that can choose a move for a seat.
///
/// Agents implement this directly; humans are adapted through
/// [`HumanPlayer`] around an [`InputProvider`].
pub trait MoveSource<R: Round> {
    /// Selects the next move for `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] when asked to move in a terminal
    /// state, or [`GameError::Input`] when the underlying collaborator fails.
    fn select_move(&mut self, round: &R, seat: Seat) -> Result<R::Move, GameError>;
}

/// Whether a participant is driven by a person or by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Role {
    /// Moves come from an input provider.
    Human,
    /// Moves come from a heuristic agent.
    Agent,
}

/// A seat at the table together with whoever plays it.
pub struct Participant<R: Round> {
    seat: Seat,
    role: Role,
    name: String,
    source: Box<dyn MoveSource<R>>,
}

impl<R: Round> Participant<R> {
    /// Creates a participant.
    pub fn new(
        seat: Seat,
        role: Role,
        name: impl Into<String>,
        source: Box<dyn MoveSource<R>>,
    ) -> Self {
        Self {
            seat,
            role,
            name: name.into(),
            source,
        }
    }

    /// Seat this participant occupies.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Human or agent.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks the participant for a move.
    pub(crate) fn select_move(&mut self, round: &R) -> Result<R::Move, GameError> {
        self.source.select_move(round, self.seat)
    }
}

impl<R: Round> std::fmt::Debug for Participant<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("seat", &self.seat)
            .field("role", &self.role)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// External source of human moves.
///
/// Implementations own their validation loop: they re-prompt until the
/// input names one of `legal`, blocking as long as it takes.
pub trait InputProvider<M> {
    /// Requests one of the legal moves.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Input`] if input can no longer be read.
    fn request_move(&mut self, legal: &[M]) -> Result<M, GameError>;
}

/// A provider shared between a participant and the surrounding session,
/// which also prompts between rounds.
impl<M, P: InputProvider<M>> InputProvider<M> for Rc<RefCell<P>> {
    fn request_move(&mut self, legal: &[M]) -> Result<M, GameError> {
        self.borrow_mut().request_move(legal)
    }
}

/// Adapts an [`InputProvider`] into a [`MoveSource`].
#[derive(Debug)]
pub struct HumanPlayer<P> {
    provider: P,
}

impl<P> HumanPlayer<P> {
    /// Wraps an input provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<R, P> MoveSource<R> for HumanPlayer<P>
where
    R: Round,
    P: InputProvider<R::Move>,
{
    #[instrument(skip(self, round))]
    fn select_move(&mut self, round: &R, seat: Seat) -> Result<R::Move, GameError> {
        let legal = round.legal_moves(seat);
        if legal.is_empty() {
            return Err(GameError::NoLegalMove);
        }
        let mv = self.provider.request_move(&legal)?;
        if !legal.contains(&mv) {
            warn!(%mv, "Input provider returned an illegal move");
            return Err(GameError::IllegalMove(mv.to_string()));
        }
        debug!(%mv, "Human chose move");
        Ok(mv)
    }
}

/// Input provider that replays a fixed list of moves.
///
/// Useful for tests and demos. Scripted moves that are not legal at the
/// time they are requested are skipped, like a person re-entering a choice.
#[derive(Debug, Clone)]
pub struct ScriptedInput<M> {
    moves: VecDeque<M>,
}

impl<M> ScriptedInput<M> {
    /// Creates a script from moves in play order.
    pub fn new(moves: impl IntoIterator<Item = M>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet consumed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl<M: PartialEq + std::fmt::Debug> InputProvider<M> for ScriptedInput<M> {
    fn request_move(&mut self, legal: &[M]) -> Result<M, GameError> {
        while let Some(mv) = self.moves.pop_front() {
            if legal.contains(&mv) {
                return Ok(mv);
            }
            debug!(?mv, "Skipping scripted move that is not legal");
        }
        Err(GameError::Input("Script exhausted".to_string()))
    }
}
