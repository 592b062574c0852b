//! Rule-prioritized computer opponent.
//!
//! Each turn the agent tries, in order:
//!
//! 1. **Offensive**: complete a line holding two of its own markers.
//! 2. **Defensive**: block a line holding two of the opponent's markers.
//! 3. **Positional**: take the center.
//! 4. **Random**: any empty square.
//!
//! Lines are scanned in table order and the first hit wins; no attempt is
//! made to rank competing lines.

use super::position::Position;
use super::round::BoardRound;
use super::rules::WinningLines;
use super::types::Board;
use crate::engine::{MoveSource, Round};
use crate::error::GameError;
use crate::seat::Seat;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced the agent's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Posture {
    /// Completing its own line.
    Offensive,
    /// Blocking the opponent's line.
    Defensive,
    /// Taking the center.
    Positional,
    /// Uniform choice among empty squares.
    Random,
}

/// Heuristic tic-tac-toe agent.
#[derive(Debug, Clone)]
pub struct BoardAgent<G> {
    rng: G,
}

impl<G: Rng> BoardAgent<G> {
    /// Creates an agent drawing from `rng` when no rule applies.
    pub fn new(rng: G) -> Self {
        Self { rng }
    }

    /// Chooses a square for `seat`, reporting which rule decided.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, board, lines))]
    pub fn choose(
        &mut self,
        board: &Board,
        lines: &WinningLines,
        seat: Seat,
    ) -> Result<(Position, Posture), GameError> {
        if let Some(pos) = square_of_interest(board, lines, seat) {
            return Ok((pos, Posture::Offensive));
        }
        if let Some(pos) = square_of_interest(board, lines, seat.opponent()) {
            return Ok((pos, Posture::Defensive));
        }
        if board.is_empty(Position::Center) {
            return Ok((Position::Center, Posture::Positional));
        }
        let open = Position::valid_moves(board);
        let pos = *open.choose(&mut self.rng).ok_or(GameError::NoLegalMove)?;
        Ok((pos, Posture::Random))
    }
}

/// First empty square in the first line where `seat` holds two markers.
fn square_of_interest(board: &Board, lines: &WinningLines, seat: Seat) -> Option<Position> {
    lines.iter().find_map(|line| {
        if board.count_markers(seat, line) == 2 {
            line.iter().copied().find(|pos| board.is_empty(*pos))
        } else {
            None
        }
    })
}

impl<G: Rng> MoveSource<BoardRound> for BoardAgent<G> {
    #[instrument(skip(self, round))]
    fn select_move(&mut self, round: &BoardRound, seat: Seat) -> Result<Position, GameError> {
        if round.legal_moves(seat).is_empty() {
            return Err(GameError::NoLegalMove);
        }
        let (pos, posture) = self.choose(round.board(), round.lines(), seat)?;
        debug!(%pos, %posture, "Agent chose square");
        Ok(pos)
    }
}
