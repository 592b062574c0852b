//! Error types shared by the rule evaluators, agents and the match engine.

use crate::games::tictactoe::Position;
use crate::seat::Seat;
use derive_more::{Display, Error};
use tracing::instrument;

/// Configuration error with location tracking.
///
/// Raised when a rule table or config file is malformed. Always fatal at
/// startup; never produced once a match is running.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error raised when a game operation is invoked out of sequence.
///
/// Apart from [`GameError::Input`], every variant is a precondition
/// violation: the state machine asked for something that cannot happen in
/// a correctly sequenced match.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A seat tried to move out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Seat),

    /// The round has already reached a terminal state.
    #[display("Round is already over")]
    RoundOver,

    /// The match has already been decided.
    #[display("Match is already over")]
    MatchOver,

    /// An agent was asked to move but nothing is legal.
    #[display("No legal move available")]
    NoLegalMove,

    /// A card was dealt from an empty deck.
    #[display("Deck is exhausted")]
    DeckExhausted,

    /// A move outside the legal set reached the core.
    #[display("Illegal move: {}", _0)]
    IllegalMove(String),

    /// The input collaborator failed to produce a move.
    #[display("Input failed: {}", _0)]
    Input(String),

    /// Rule configuration was rejected.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_tracks_caller() {
        let err = ConfigError::new("bad table");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Config error: bad table at"));
    }

    #[test]
    fn test_config_error_is_source_of_game_error() {
        use std::error::Error;

        let err: GameError = ConfigError::new("bad table").into();
        assert!(err.source().is_some());
        assert!(GameError::RoundOver.source().is_none());
    }
}
