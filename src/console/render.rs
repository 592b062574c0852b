//! Text rendering of match events.

use parlor_games::{
    BoardRound, DEALER, Gesture, GestureRound, Ledger, Match, MatchEvent, Observer, Outcome, PLAYER,
    Position, PurseLedger, Round, ScoreLedger, Seat, TwentyOneAction, TwentyOneRound,
};
use std::io::{Stdout, Write};
use tracing::warn;

/// Ledgers the renderer can summarize.
pub trait Standings: Ledger {
    /// What the standing is called, capitalized.
    const LABEL: &'static str;

    /// Where the match stands, given the display names of seats A and B.
    fn summary(&self, names: [&str; 2]) -> String;
}

impl Standings for ScoreLedger {
    const LABEL: &'static str = "Score";

    fn summary(&self, [a, b]: [&str; 2]) -> String {
        format!(
            "{} {}, {} {} (first to {})",
            a,
            self.standing(Seat::A),
            b,
            self.standing(Seat::B),
            self.threshold()
        )
    }
}

impl Standings for PurseLedger {
    const LABEL: &'static str = "Purse";

    fn summary(&self, _names: [&str; 2]) -> String {
        format!("{} (win at {})", self.purse(), self.winning_purse())
    }
}

/// Writes a running commentary of the match to a terminal.
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    out: W,
}

impl ConsoleRenderer<Stdout> {
    /// Renderer on stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer on any writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints one line. Write failures are logged, not fatal.
    pub fn line(&mut self, text: impl AsRef<str>) {
        if let Err(e) = writeln!(self.out, "{}", text.as_ref()) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn round_result<R: Round, L: Ledger>(&mut self, outcome: Outcome, state: &Match<R, L>) {
        match outcome {
            Outcome::Win(seat) => {
                self.line(format!("{} won this round!", state.participant(seat).name()))
            }
            Outcome::Tie => self.line("A tie game. How boring."),
        }
    }

    /// Prints the match result followed by the final standing.
    ///
    /// `None` means play stopped before anyone reached the threshold.
    pub fn match_result<R: Round, L: Standings>(
        &mut self,
        winner: Option<Seat>,
        state: &Match<R, L>,
    ) {
        match winner {
            Some(seat) => self.line(format!(
                "{} won the match after {}!",
                state.participant(seat).name(),
                rounds(state.round_number())
            )),
            None => self.line(format!(
                "The match ends undecided after {}.",
                rounds(state.round_number())
            )),
        }
        let summary = state.ledger().summary(names(state));
        self.line(format!("Final {}: {}", L::LABEL.to_lowercase(), summary));
    }

    fn standings<R: Round, L: Standings>(&mut self, state: &Match<R, L>) {
        let summary = state.ledger().summary(names(state));
        self.line(format!("{}: {}", L::LABEL, summary));
    }

    fn table(&mut self, round: &TwentyOneRound) {
        let shown: Vec<String> = round
            .visible_dealer_cards()
            .iter()
            .map(ToString::to_string)
            .collect();
        if round.dealer_hole_hidden() {
            self.line(format!("Dealer shows: {} and a face-down card", shown.join(", ")));
        } else {
            self.line(format!(
                "Dealer has: {} ({})",
                shown.join(", "),
                round.value(DEALER)
            ));
        }
        self.line(format!(
            "Your hand: {} ({})",
            round.hand(PLAYER),
            round.value(PLAYER)
        ));
    }
}

fn rounds(count: u32) -> String {
    if count == 1 {
        "1 round".to_string()
    } else {
        format!("{} rounds", count)
    }
}

fn names<R: Round, L: Ledger>(state: &Match<R, L>) -> [&str; 2] {
    [
        state.participant(Seat::A).name(),
        state.participant(Seat::B).name(),
    ]
}

impl<W: Write> Observer<GestureRound, ScoreLedger> for ConsoleRenderer<W> {
    fn notify(
        &mut self,
        event: &MatchEvent<Gesture>,
        state: &Match<GestureRound, ScoreLedger>,
    ) {
        match event {
            MatchEvent::RoundStarted { number, .. } => self.line(format!("\nRound {}.", number)),
            MatchEvent::MoveMade { .. } => {
                if let Some((a, b)) = state.round().revealed() {
                    self.line(format!(
                        "{} chose {}. {} chose {}.",
                        state.participant(Seat::A).name(),
                        a,
                        state.participant(Seat::B).name(),
                        b
                    ));
                }
            }
            MatchEvent::RoundComplete(outcome) => {
                self.round_result(*outcome, state);
                self.standings(state);
            }
            MatchEvent::MatchComplete(winner) => self.match_result(*winner, state),
        }
    }
}

impl<W: Write> Observer<BoardRound, ScoreLedger> for ConsoleRenderer<W> {
    fn notify(
        &mut self,
        event: &MatchEvent<Position>,
        state: &Match<BoardRound, ScoreLedger>,
    ) {
        match event {
            MatchEvent::RoundStarted { number, starter } => {
                self.line(format!(
                    "\nRound {}. {} goes first.",
                    number,
                    state.participant(*starter).name()
                ));
                self.line(state.round().board().display());
            }
            MatchEvent::MoveMade { seat, mv } => {
                self.line(format!(
                    "{} marks square {}.",
                    state.participant(*seat).name(),
                    mv
                ));
                self.line(state.round().board().display());
            }
            MatchEvent::RoundComplete(outcome) => {
                self.round_result(*outcome, state);
                self.standings(state);
            }
            MatchEvent::MatchComplete(winner) => self.match_result(*winner, state),
        }
    }
}

impl<W: Write> Observer<TwentyOneRound, PurseLedger> for ConsoleRenderer<W> {
    fn notify(
        &mut self,
        event: &MatchEvent<TwentyOneAction>,
        state: &Match<TwentyOneRound, PurseLedger>,
    ) {
        let round = state.round();
        match event {
            MatchEvent::RoundStarted { number, .. } => {
                self.line(format!("\nHand {}.", number));
                self.table(round);
            }
            MatchEvent::MoveMade { seat, mv } => {
                let name = state.participant(*seat).name().to_string();
                match mv {
                    TwentyOneAction::Hit => {
                        let hand = round.hand(*seat);
                        if let Some(card) = hand.cards().last() {
                            self.line(format!(
                                "{} hits and draws the {} ({}).",
                                name,
                                card,
                                round.value(*seat)
                            ));
                        }
                        if round.is_busted(*seat) {
                            self.line(format!("{} busts!", name));
                        }
                    }
                    TwentyOneAction::Stay => {
                        self.line(format!("{} stays at {}.", name, round.value(*seat)))
                    }
                }
            }
            MatchEvent::RoundComplete(outcome) => {
                self.table(round);
                self.round_result(*outcome, state);
                self.standings(state);
            }
            MatchEvent::MatchComplete(winner) => self.match_result(*winner, state),
        }
    }
}
