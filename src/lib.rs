//! Parlor games - turn-based console games on a shared round engine
//!
//! Rock-paper-scissors (with the lizard-Spock variant), tic-tac-toe and
//! twenty-one, each played by a human against a heuristic computer agent.
//!
//! # Architecture
//!
//! - **Games**: move catalogs, pure rule evaluators and agents per game
//! - **Engine**: the [`Round`] trait and the [`Match`] state machine that
//!   alternates turns, evaluates rounds and restarts them
//! - **Ledger**: first-to-N scores and purse tracking
//! - **Config**: TOML-backed settings for every game
//!
//! # Example
//!
//! ```
//! use parlor_games::{
//!     BoardAgent, BoardRound, BoardRules, Match, MatchSettings, NullObserver,
//!     Participant, Role, ScoreLedger, Seat, seeded_rng,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let players: [Participant<BoardRound>; 2] = [
//!     Participant::new(Seat::A, Role::Agent, "Left", Box::new(BoardAgent::new(seeded_rng(Some(1))))),
//!     Participant::new(Seat::B, Role::Agent, "Right", Box::new(BoardAgent::new(seeded_rng(Some(2))))),
//! ];
//! let mut game = Match::new(
//!     BoardRules::default(),
//!     players,
//!     ScoreLedger::new(3)?,
//!     MatchSettings::new(Seat::A, true),
//!     Box::new(seeded_rng(Some(3))),
//! )?;
//! let outcome = game.play_round(&mut NullObserver)?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod error;
mod games;
mod ledger;
mod rng;
mod seat;

// Crate-level exports - Configuration
pub use config::{GameConfig, RpsConfig, TicTacToeConfig, TwentyOneConfig};

// Crate-level exports - Engine
pub use engine::{
    EventLog, HumanPlayer, InputProvider, Match, MatchEvent, MatchSettings, MatchState,
    MoveSource, NullObserver, Observer, Participant, Role, Round, RoundStatus, ScriptedInput,
};

// Crate-level exports - Errors
pub use error::{ConfigError, GameError};

// Crate-level exports - Ledgers
pub use ledger::{Ledger, PurseLedger, ScoreLedger};

// Crate-level exports - Randomness
pub use rng::{GameRng, seeded_rng};

// Crate-level exports - Seats and outcomes
pub use seat::{Outcome, Seat};

// Crate-level exports - Gesture games
pub use games::gesture::{
    BeatsRelation, Gesture, GestureAgent, GestureRound, GestureRules, GestureVariant,
    evaluate_gesture,
};

// Crate-level exports - Tic-tac-toe
pub use games::tictactoe::{
    Board, BoardAgent, BoardRound, BoardRules, BoardStatus, Position, Posture, Square,
    WinningLines, evaluate_board,
};
pub use games::tictactoe::rules::{STANDARD_LINES, check_winner, is_full, winners};

// Crate-level exports - Twenty-one
pub use games::twentyone::{
    BUST_LIMIT, Card, DEALER, DealerAgent, Deck, Hand, PLAYER, Rank, Suit, TwentyOneAction,
    TwentyOneRound, TwentyOneRules, compare_hands, hand_value, is_busted,
};
