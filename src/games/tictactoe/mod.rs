mod agent;
mod position;
mod round;
pub mod rules;
mod types;

pub use agent::{BoardAgent, Posture};
pub use position::Position;
pub use round::{BoardRound, BoardRules};
pub use rules::{BoardStatus, WinningLines, evaluate_board};
pub use types::{Board, Square};
