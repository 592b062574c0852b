mod agent;
mod card;
mod deck;
mod hand;
mod round;

pub use agent::DealerAgent;
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{BUST_LIMIT, Hand, compare_hands, hand_value, is_busted};
pub use round::{DEALER, PLAYER, TwentyOneAction, TwentyOneRound, TwentyOneRules};
