//! The table of winning lines.

use super::super::Position;
use crate::error::ConfigError;
use tracing::instrument;

/// The 8 standard lines, in the order the agent scans them.
pub const STANDARD_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Validated, ordered set of winning lines.
///
/// Order matters: win detection and the agent's offensive and defensive
/// scans both take the first matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    lines: Vec<[Position; 3]>,
}

impl WinningLines {
    /// Validates a line table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the table is empty, a line repeats a
    /// position, or a line appears twice.
    #[instrument(skip(lines))]
    pub fn new(lines: Vec<[Position; 3]>) -> Result<Self, ConfigError> {
        if lines.is_empty() {
            return Err(ConfigError::new("Winning line table is empty"));
        }
        for (i, [a, b, c]) in lines.iter().enumerate() {
            if a == b || b == c || a == c {
                return Err(ConfigError::new(format!(
                    "Winning line {} repeats a position",
                    i + 1
                )));
            }
            let mut sorted = [*a, *b, *c];
            sorted.sort();
            let duplicate = lines[..i].iter().any(|other| {
                let mut other = *other;
                other.sort();
                other == sorted
            });
            if duplicate {
                return Err(ConfigError::new(format!(
                    "Winning line {} is listed twice",
                    i + 1
                )));
            }
        }
        Ok(Self { lines })
    }

    /// Rows, columns and diagonals of the 3x3 board.
    pub fn standard() -> Self {
        Self {
            lines: STANDARD_LINES.to_vec(),
        }
    }

    /// Lines in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &[Position; 3]> {
        self.lines.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for WinningLines {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_validates() {
        let lines = WinningLines::new(STANDARD_LINES.to_vec()).unwrap();
        assert_eq!(lines, WinningLines::standard());
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(WinningLines::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_repeated_position() {
        let lines = vec![[Position::Center, Position::Center, Position::TopLeft]];
        assert!(WinningLines::new(lines).is_err());
    }

    #[test]
    fn test_rejects_duplicate_line() {
        let lines = vec![
            [Position::TopLeft, Position::Center, Position::BottomRight],
            [Position::BottomRight, Position::Center, Position::TopLeft],
        ];
        assert!(WinningLines::new(lines).is_err());
    }
}
