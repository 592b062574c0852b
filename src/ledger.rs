//! Score and purse bookkeeping across the rounds of a match.

use crate::error::{ConfigError, GameError};
use crate::seat::{Outcome, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Accumulates round outcomes into a match-level result.
pub trait Ledger: std::fmt::Debug {
    /// Posts the outcome of a finished round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] once the match threshold has been
    /// reached.
    fn record_outcome(&mut self, outcome: Outcome) -> Result<(), GameError>;

    /// Returns true if the given seat has met its match-winning condition.
    fn threshold_reached_by(&self, seat: Seat) -> bool;

    /// Current score or purse of a seat.
    fn standing(&self, seat: Seat) -> u32;

    /// Returns true once either seat has won the match.
    fn match_threshold_reached(&self) -> bool {
        Seat::BOTH.iter().any(|seat| self.threshold_reached_by(*seat))
    }

    /// Returns the match winner, if decided.
    fn match_winner(&self) -> Option<Seat> {
        Seat::BOTH
            .into_iter()
            .find(|seat| self.threshold_reached_by(*seat))
    }
}

/// First-to-N score ledger for gesture and board games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreLedger {
    /// Scores indexed by [`Seat::index`].
    scores: [u32; 2],
    /// Score that wins the match.
    threshold: u32,
}

impl ScoreLedger {
    /// Creates a ledger with both scores at zero.
    ///
    /// # Errors
    ///
    /// A threshold of zero would end the match before it starts.
    #[instrument]
    pub fn new(threshold: u32) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::new("Score limit must be at least 1"));
        }
        Ok(Self {
            scores: [0, 0],
            threshold,
        })
    }
}

impl Ledger for ScoreLedger {
    #[instrument(skip(self), fields(scores = ?self.scores))]
    fn record_outcome(&mut self, outcome: Outcome) -> Result<(), GameError> {
        if self.match_threshold_reached() {
            return Err(GameError::MatchOver);
        }
        if let Some(winner) = outcome.winner() {
            self.scores[winner.index()] += 1;
            debug!(%winner, score = self.scores[winner.index()], "Score incremented");
            if self.threshold_reached_by(winner) {
                info!(%winner, threshold = self.threshold, "Score limit reached");
            }
        }
        Ok(())
    }

    fn threshold_reached_by(&self, seat: Seat) -> bool {
        self.scores[seat.index()] >= self.threshold
    }

    fn standing(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }
}

/// Purse ledger for the card game.
///
/// Only one seat holds a purse. It moves by exactly one per decided round.
/// The holder wins the match on reaching the winning purse and loses it on
/// going broke.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PurseLedger {
    /// Seat that owns the purse.
    holder: Seat,
    /// Current balance.
    purse: u32,
    /// Balance that wins the match.
    winning_purse: u32,
}

impl PurseLedger {
    /// Creates a purse ledger.
    ///
    /// # Errors
    ///
    /// The starting purse must be positive and below the winning purse.
    #[instrument]
    pub fn new(holder: Seat, starting_purse: u32, winning_purse: u32) -> Result<Self, ConfigError> {
        if starting_purse == 0 {
            return Err(ConfigError::new("Starting purse must be positive"));
        }
        if winning_purse <= starting_purse {
            return Err(ConfigError::new(format!(
                "Winning purse {} must exceed starting purse {}",
                winning_purse, starting_purse
            )));
        }
        Ok(Self {
            holder,
            purse: starting_purse,
            winning_purse,
        })
    }
}

impl Ledger for PurseLedger {
    #[instrument(skip(self), fields(purse = self.purse))]
    fn record_outcome(&mut self, outcome: Outcome) -> Result<(), GameError> {
        if self.match_threshold_reached() {
            return Err(GameError::MatchOver);
        }
        match outcome.winner() {
            Some(winner) if winner == self.holder => self.purse += 1,
            Some(_) => self.purse -= 1,
            None => {}
        }
        debug!(purse = self.purse, "Purse updated");
        if self.purse == 0 {
            info!("Purse is empty");
        } else if self.purse >= self.winning_purse {
            info!(purse = self.purse, "Winning purse reached");
        }
        Ok(())
    }

    fn threshold_reached_by(&self, seat: Seat) -> bool {
        if seat == self.holder {
            self.purse >= self.winning_purse
        } else {
            self.purse == 0
        }
    }

    fn standing(&self, seat: Seat) -> u32 {
        if seat == self.holder { self.purse } else { 0 }
    }
}
