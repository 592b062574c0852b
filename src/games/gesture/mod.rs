mod agent;
mod round;
mod rules;
mod types;

pub use agent::GestureAgent;
pub use round::{GestureRound, GestureRules};
pub use rules::{BeatsRelation, evaluate_gesture};
pub use types::{Gesture, GestureVariant};
