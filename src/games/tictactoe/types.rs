//! Core domain types for tic-tac-toe.

use super::position::Position;
use crate::error::GameError;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square marked by a seat.
    Occupied(Seat),
}

impl Square {
    /// Marker drawn for the square: seat A plays X, seat B plays O.
    pub fn marker(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Seat::A) => 'X',
            Square::Occupied(Seat::B) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are write-once: a marked square cannot be re-marked until a new
/// board is created for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Marks an empty square for a seat.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SquareOccupied`] if the square already holds a
    /// marker.
    pub fn mark(&mut self, pos: Position, seat: Seat) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(seat);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of the given positions marked by `seat`.
    pub fn count_markers(&self, seat: Seat, positions: &[Position]) -> usize {
        positions
            .iter()
            .filter(|pos| self.get(**pos) == Square::Occupied(seat))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their number so players can see what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => pos.number().to_string(),
                    square => square.marker().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_write_once() {
        let mut board = Board::new();
        board.mark(Position::Center, Seat::A).unwrap();
        assert_eq!(
            board.mark(Position::Center, Seat::B),
            Err(GameError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Seat::A));
    }

    #[test]
    fn test_display_shows_numbers_and_markers() {
        let mut board = Board::new();
        board.mark(Position::TopLeft, Seat::A).unwrap();
        board.mark(Position::BottomRight, Seat::B).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_count_markers() {
        let mut board = Board::new();
        board.mark(Position::TopLeft, Seat::A).unwrap();
        board.mark(Position::TopCenter, Seat::A).unwrap();
        board.mark(Position::TopRight, Seat::B).unwrap();
        let row = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        assert_eq!(board.count_markers(Seat::A, &row), 2);
        assert_eq!(board.count_markers(Seat::B, &row), 1);
    }
}
