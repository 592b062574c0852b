//! Alternating-turn round on a fresh board.

use super::position::Position;
use super::rules::{BoardStatus, WinningLines, evaluate_board};
use super::types::Board;
use crate::engine::{Round, RoundStatus, ensure_turn};
use crate::error::GameError;
use crate::seat::Seat;
use rand::RngCore;
use tracing::{debug, instrument};

/// Rules for a board game.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_new::new)]
pub struct BoardRules {
    lines: WinningLines,
}

impl BoardRules {
    /// The winning-line table.
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }
}

/// One game of tic-tac-toe.
///
/// The opener marks first; the turn passes after every non-terminal move.
/// The round ends as soon as a line is complete or the board is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRound {
    lines: WinningLines,
    board: Board,
    to_move: Seat,
    history: Vec<Position>,
    status: BoardStatus,
}

impl BoardRound {
    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The winning-line table in play.
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }

    /// Positions marked so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Board evaluation after the last move.
    pub fn board_status(&self) -> BoardStatus {
        self.status
    }
}

impl Round for BoardRound {
    type Move = Position;
    type Rules = BoardRules;

    #[instrument(skip(rules, _rng))]
    fn start(
        rules: &BoardRules,
        first: Seat,
        _rng: &mut dyn RngCore,
    ) -> Result<Self, GameError> {
        Ok(Self {
            lines: rules.lines.clone(),
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
            status: BoardStatus::InProgress,
        })
    }

    fn status(&self) -> RoundStatus {
        match self.status {
            BoardStatus::InProgress => RoundStatus::AwaitingMove(self.to_move),
            BoardStatus::Decided(outcome) => RoundStatus::Complete(outcome),
        }
    }

    fn legal_moves(&self, seat: Seat) -> Vec<Position> {
        match self.status() {
            RoundStatus::AwaitingMove(turn) if turn == seat => Position::valid_moves(&self.board),
            _ => Vec::new(),
        }
    }

    #[instrument(skip(self), fields(to_move = %self.to_move))]
    fn apply(&mut self, seat: Seat, mv: Position) -> Result<(), GameError> {
        ensure_turn(self.status(), seat)?;
        self.board.mark(mv, seat)?;
        self.history.push(mv);
        self.status = evaluate_board(&self.board, &self.lines);
        if self.status == BoardStatus::InProgress {
            self.to_move = seat.opponent();
        } else {
            debug!(status = ?self.status, "Board decided");
        }
        Ok(())
    }
}
