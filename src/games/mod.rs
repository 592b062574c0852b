//! Game implementations built on the round engine.

pub mod gesture;
pub mod tictactoe;
pub mod twentyone;
