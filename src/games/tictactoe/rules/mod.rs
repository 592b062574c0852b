//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] and a [`WinningLines`] table. Rules are
//! separated from board storage so the round and the agent can share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{STANDARD_LINES, WinningLines};
pub use win::{check_winner, winners};

use super::Board;
use crate::seat::Outcome;
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// No line is complete and squares remain.
    InProgress,
    /// The round is over.
    Decided(Outcome),
}

/// Evaluates a board against a line table.
///
/// A completed line wins even on a full board; a full board without one is
/// a tie.
#[instrument(skip(board, lines))]
pub fn evaluate_board(board: &Board, lines: &WinningLines) -> BoardStatus {
    if let Some(winner) = check_winner(board, lines) {
        BoardStatus::Decided(Outcome::Win(winner))
    } else if is_full(board) {
        BoardStatus::Decided(Outcome::Tie)
    } else {
        BoardStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use super::*;
    use crate::seat::Seat;

    #[test]
    fn test_fresh_board_in_progress() {
        assert_eq!(
            evaluate_board(&Board::new(), &WinningLines::standard()),
            BoardStatus::InProgress
        );
    }

    #[test]
    fn test_win_on_last_square_beats_tie() {
        let mut board = Board::new();
        // X X O / O X O / X O X, with X completing the 1-5-9 diagonal last
        let marks = [
            (Position::TopLeft, Seat::A),
            (Position::TopCenter, Seat::A),
            (Position::TopRight, Seat::B),
            (Position::MiddleLeft, Seat::B),
            (Position::Center, Seat::A),
            (Position::MiddleRight, Seat::B),
            (Position::BottomLeft, Seat::A),
            (Position::BottomCenter, Seat::B),
            (Position::BottomRight, Seat::A),
        ];
        for (pos, seat) in marks {
            board.mark(pos, seat).unwrap();
        }
        assert_eq!(
            evaluate_board(&board, &WinningLines::standard()),
            BoardStatus::Decided(Outcome::Win(Seat::A))
        );
    }
}
