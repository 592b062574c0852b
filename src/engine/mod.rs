//! Generic turn-based round engine.
//!
//! Games plug in by implementing [`Round`]; the [`Match`] state machine
//! handles turn order, evaluation, scoring and round restarts for all of
//! them.

mod game_match;
mod observer;
mod participant;
mod round;

pub use game_match::{Match, MatchSettings, MatchState};
pub use observer::{EventLog, MatchEvent, NullObserver, Observer};
pub use participant::{HumanPlayer, InputProvider, MoveSource, Participant, Role, ScriptedInput};
pub use round::{Round, RoundStatus};

pub(crate) use round::ensure_turn;
