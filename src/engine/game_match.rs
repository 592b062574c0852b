//! The match state machine.
//!
//! A [`Match`] owns both participants, the ledger and the active round, and
//! advances one transition per [`Match::step`]:
//!
//! ```text
//! AwaitingMove(seat) -> Evaluating -> RoundComplete -> MatchComplete
//!                                           |
//!                                           +-> AwaitingMove(next starter)
//! ```

use super::observer::{MatchEvent, Observer};
use super::participant::Participant;
use super::round::{Round, RoundStatus};
use crate::error::{ConfigError, GameError};
use crate::ledger::Ledger;
use crate::seat::{Outcome, Seat};
use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use rand::RngCore;
use tracing::{debug, info, instrument, warn};

/// Phase of the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting on a seat to move.
    AwaitingMove(Seat),
    /// The round is over; its outcome has not been posted yet.
    Evaluating,
    /// The outcome has been posted to the ledger.
    RoundComplete(Outcome),
    /// The ledger reached its threshold.
    MatchComplete(Option<Seat>),
}

/// Who opens rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, new)]
#[setters(prefix = "with_")]
pub struct MatchSettings {
    /// Seat that opens the first round.
    first_mover: Seat,
    /// Whether the opener swaps between rounds.
    alternate_first_mover: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self::new(Seat::A, false)
    }
}

/// A match between two participants.
pub struct Match<R: Round, L: Ledger> {
    rules: R::Rules,
    participants: [Participant<R>; 2],
    ledger: L,
    settings: MatchSettings,
    starter: Seat,
    round: R,
    round_number: u32,
    state: MatchState,
    rng: Box<dyn RngCore>,
}

impl<R: Round, L: Ledger> Match<R, L> {
    /// Creates a match and deals its first round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if participants are not in seats A and
    /// B respectively, and passes through any error from starting the first
    /// round.
    #[instrument(skip_all, fields(first = %settings.first_mover()))]
    pub fn new(
        rules: R::Rules,
        participants: [Participant<R>; 2],
        ledger: L,
        settings: MatchSettings,
        mut rng: Box<dyn RngCore>,
    ) -> Result<Self, GameError> {
        for (participant, seat) in participants.iter().zip(Seat::BOTH) {
            if participant.seat() != seat {
                return Err(ConfigError::new(format!(
                    "{} must sit in seat {}",
                    participant.name(),
                    seat
                ))
                .into());
            }
        }
        let starter = *settings.first_mover();
        let round = R::start(&rules, starter, rng.as_mut())?;
        let state = Self::awaiting(&round);
        info!(?state, "Match started");
        Ok(Self {
            rules,
            participants,
            ledger,
            settings,
            starter,
            round,
            round_number: 1,
            state,
            rng,
        })
    }

    fn awaiting(round: &R) -> MatchState {
        match round.status() {
            RoundStatus::AwaitingMove(seat) => MatchState::AwaitingMove(seat),
            RoundStatus::Complete(_) => MatchState::Evaluating,
        }
    }

    /// Current phase.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The active (or just finished) round.
    pub fn round(&self) -> &R {
        &self.round
    }

    /// Rule tables shared by every round.
    pub fn rules(&self) -> &R::Rules {
        &self.rules
    }

    /// The ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Participant in a seat.
    pub fn participant(&self, seat: Seat) -> &Participant<R> {
        &self.participants[seat.index()]
    }

    /// Seat that opened the current round.
    pub fn starter(&self) -> Seat {
        self.starter
    }

    /// One-based number of the current round.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Returns true once the match has a winner.
    pub fn is_complete(&self) -> bool {
        self.ledger.match_threshold_reached()
    }

    /// Match winner, if decided.
    pub fn winner(&self) -> Option<Seat> {
        self.ledger.match_winner()
    }

    /// Advances the state machine by one transition.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] from the terminal state, and passes
    /// through any error raised by a participant or the round.
    #[instrument(skip(self, observer), fields(state = ?self.state, round = self.round_number))]
    pub fn step(&mut self, observer: &mut dyn Observer<R, L>) -> Result<MatchState, GameError> {
        let (next, event) = match self.state {
            MatchState::AwaitingMove(seat) => {
                let mv = self.participants[seat.index()].select_move(&self.round)?;
                if !self.round.legal_moves(seat).contains(&mv) {
                    warn!(%seat, %mv, "Participant chose an illegal move");
                    return Err(GameError::IllegalMove(mv.to_string()));
                }
                self.round.apply(seat, mv)?;
                debug!(%seat, %mv, "Move applied");
                (Self::awaiting(&self.round), MatchEvent::MoveMade { seat, mv })
            }
            MatchState::Evaluating => {
                let outcome = match self.round.status() {
                    RoundStatus::Complete(outcome) => outcome,
                    RoundStatus::AwaitingMove(_) => return Err(GameError::NoLegalMove),
                };
                self.ledger.record_outcome(outcome)?;
                info!(%outcome, round = self.round_number, "Round complete");
                (
                    MatchState::RoundComplete(outcome),
                    MatchEvent::RoundComplete(outcome),
                )
            }
            MatchState::RoundComplete(_) => {
                if self.ledger.match_threshold_reached() {
                    let winner = self.ledger.match_winner();
                    info!(?winner, "Match complete");
                    (
                        MatchState::MatchComplete(winner),
                        MatchEvent::MatchComplete(winner),
                    )
                } else {
                    let starter = if *self.settings.alternate_first_mover() {
                        self.starter.opponent()
                    } else {
                        self.starter
                    };
                    self.round = R::start(&self.rules, starter, self.rng.as_mut())?;
                    self.starter = starter;
                    self.round_number += 1;
                    debug!(starter = %self.starter, round = self.round_number, "Next round");
                    (
                        Self::awaiting(&self.round),
                        MatchEvent::RoundStarted {
                            number: self.round_number,
                            starter: self.starter,
                        },
                    )
                }
            }
            MatchState::MatchComplete(_) => return Err(GameError::MatchOver),
        };
        self.state = next;
        observer.notify(&event, self);
        Ok(next)
    }

    /// Plays one round to completion and returns its outcome.
    ///
    /// Starts the next round first if the previous one has already been
    /// posted.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] if the match is already decided.
    pub fn play_round(&mut self, observer: &mut dyn Observer<R, L>) -> Result<Outcome, GameError> {
        if matches!(self.state, MatchState::RoundComplete(_)) {
            if self.is_complete() {
                return Err(GameError::MatchOver);
            }
            self.step(observer)?;
        }
        loop {
            match self.step(observer)? {
                MatchState::RoundComplete(outcome) => return Ok(outcome),
                MatchState::MatchComplete(_) => return Err(GameError::MatchOver),
                _ => {}
            }
        }
    }

    /// Plays rounds until the match is decided or `play_again` declines.
    ///
    /// Returns the match winner, or `None` if play stopped early.
    ///
    /// # Errors
    ///
    /// Passes through any error raised while playing a round.
    pub fn play<F>(
        &mut self,
        observer: &mut dyn Observer<R, L>,
        mut play_again: F,
    ) -> Result<Option<Seat>, GameError>
    where
        F: FnMut(&Self) -> bool,
    {
        loop {
            self.play_round(observer)?;
            if self.is_complete() {
                return match self.step(observer)? {
                    MatchState::MatchComplete(winner) => Ok(winner),
                    _ => Ok(None),
                };
            }
            if !play_again(self) {
                info!(rounds = self.round_number, "Match abandoned");
                return Ok(None);
            }
        }
    }
}

impl<R: Round, L: Ledger> std::fmt::Debug for Match<R, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("participants", &self.participants)
            .field("ledger", &self.ledger)
            .field("starter", &self.starter)
            .field("round_number", &self.round_number)
            .field("state", &self.state)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
