//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square};
use super::lines::WinningLines;
use crate::seat::Seat;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in table order, or `None`.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &WinningLines) -> Option<Seat> {
    lines.iter().find_map(|line| line_owner(board, line))
}

/// Every seat that owns at least one complete line.
///
/// Legal alternating play never produces more than one.
pub fn winners(board: &Board, lines: &WinningLines) -> Vec<Seat> {
    let mut seats: Vec<Seat> = lines
        .iter()
        .filter_map(|line| line_owner(board, line))
        .collect();
    seats.sort();
    seats.dedup();
    seats
}

fn line_owner(board: &Board, [a, b, c]: &[Position; 3]) -> Option<Seat> {
    match board.get(*a) {
        Square::Occupied(seat)
            if board.get(*b) == board.get(*a) && board.get(*c) == board.get(*a) =>
        {
            Some(seat)
        }
        _ => None,
    }
}
