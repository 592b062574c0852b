//! Multi-step round: deal, player's turn, dealer's turn, compare.

use super::card::Card;
use super::deck::Deck;
use super::hand::{BUST_LIMIT, Hand, compare_hands};
use crate::engine::{Round, RoundStatus, ensure_turn};
use crate::error::{ConfigError, GameError};
use crate::seat::{Outcome, Seat};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seat of the player.
pub const PLAYER: Seat = Seat::A;
/// Seat of the dealer.
pub const DEALER: Seat = Seat::B;

/// What a participant does on their turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TwentyOneAction {
    /// Take another card.
    #[strum(to_string = "hit", serialize = "h")]
    Hit,
    /// End the turn.
    #[strum(to_string = "stay", serialize = "s", serialize = "stand")]
    Stay,
}

/// Table rules for twenty-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct TwentyOneRules {
    /// Hands worth more than this are bust.
    bust_limit: u32,
    /// The dealer stays once its hand is worth at least this.
    dealer_stands_at: u32,
}

impl TwentyOneRules {
    /// Creates validated table rules.
    ///
    /// # Errors
    ///
    /// The dealer threshold must be positive and no higher than the bust
    /// limit.
    #[instrument]
    pub fn new(bust_limit: u32, dealer_stands_at: u32) -> Result<Self, ConfigError> {
        if dealer_stands_at == 0 || dealer_stands_at > bust_limit {
            return Err(ConfigError::new(format!(
                "Dealer threshold {} must be between 1 and the bust limit {}",
                dealer_stands_at, bust_limit
            )));
        }
        Ok(Self {
            bust_limit,
            dealer_stands_at,
        })
    }
}

impl Default for TwentyOneRules {
    fn default() -> Self {
        Self {
            bust_limit: BUST_LIMIT,
            dealer_stands_at: 17,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    PlayerTurn,
    DealerTurn,
    Done(Outcome),
}

/// One hand of twenty-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwentyOneRound {
    rules: TwentyOneRules,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl TwentyOneRound {
    /// Deals a round from a prepared deck.
    ///
    /// Two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck runs out while
    /// dealing.
    #[instrument(skip(deck), fields(cards = deck.len()))]
    pub fn deal(rules: TwentyOneRules, mut deck: Deck) -> Result<Self, GameError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.push(deck.deal()?);
            dealer.push(deck.deal()?);
        }
        debug!(player = %player, "Initial hands dealt");
        Ok(Self {
            rules,
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
        })
    }

    /// Table rules for this round.
    pub fn rules(&self) -> &TwentyOneRules {
        &self.rules
    }

    /// The hand held by a seat.
    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::A => &self.player,
            Seat::B => &self.dealer,
        }
    }

    /// Value of a seat's hand under this round's bust limit.
    pub fn value(&self, seat: Seat) -> u32 {
        self.hand(seat).value(self.rules.bust_limit)
    }

    /// Returns true if a seat's hand is bust.
    pub fn is_busted(&self, seat: Seat) -> bool {
        self.hand(seat).is_busted(self.rules.bust_limit)
    }

    /// Whether the dealer's second card is still face down.
    ///
    /// It stays hidden until the player's turn ends.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    /// Dealer cards a spectator may see.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer.cards();
        if self.dealer_hole_hidden() {
            &cards[..1.min(cards.len())]
        } else {
            cards
        }
    }

    /// Cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn settle(&mut self) {
        let outcome = compare_hands(
            self.player.cards(),
            self.dealer.cards(),
            self.rules.bust_limit,
        );
        debug!(
            player = self.value(PLAYER),
            dealer = self.value(DEALER),
            %outcome,
            "Hands compared"
        );
        self.phase = Phase::Done(outcome);
    }
}

impl Round for TwentyOneRound {
    type Move = TwentyOneAction;
    type Rules = TwentyOneRules;

    /// The player always acts first; naming the dealer as opener is a
    /// configuration error.
    #[instrument(skip(rules, rng))]
    fn start(
        rules: &TwentyOneRules,
        first: Seat,
        rng: &mut dyn RngCore,
    ) -> Result<Self, GameError> {
        if first != PLAYER {
            return Err(ConfigError::new("The player always opens a twenty-one round").into());
        }
        Self::deal(*rules, Deck::shuffled(rng))
    }

    fn status(&self) -> RoundStatus {
        match self.phase {
            Phase::PlayerTurn => RoundStatus::AwaitingMove(PLAYER),
            Phase::DealerTurn => RoundStatus::AwaitingMove(DEALER),
            Phase::Done(outcome) => RoundStatus::Complete(outcome),
        }
    }

    fn legal_moves(&self, seat: Seat) -> Vec<TwentyOneAction> {
        match self.status() {
            RoundStatus::AwaitingMove(turn) if turn == seat => {
                vec![TwentyOneAction::Hit, TwentyOneAction::Stay]
            }
            _ => Vec::new(),
        }
    }

    #[instrument(skip(self), fields(phase = ?self.phase))]
    fn apply(&mut self, seat: Seat, mv: TwentyOneAction) -> Result<(), GameError> {
        ensure_turn(self.status(), seat)?;
        match mv {
            TwentyOneAction::Hit => {
                let card = self.deck.deal()?;
                match seat {
                    Seat::A => self.player.push(card),
                    Seat::B => self.dealer.push(card),
                }
                debug!(%seat, %card, value = self.value(seat), "Hit");
                if self.is_busted(seat) {
                    self.settle();
                }
            }
            TwentyOneAction::Stay => {
                debug!(%seat, value = self.value(seat), "Stay");
                match seat {
                    Seat::A => self.phase = Phase::DealerTurn,
                    Seat::B => self.settle(),
                }
            }
        }
        Ok(())
    }
}
