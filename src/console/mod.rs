//! Terminal front end: line input and match rendering.

mod input;
mod render;

pub use input::{ConsoleInput, SharedConsole, join_or};
pub use render::{ConsoleRenderer, Standings};
