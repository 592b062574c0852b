//! The welcome, match and goodbye flow around one game.

use crate::console::{ConsoleInput, ConsoleRenderer, SharedConsole, Standings};
use anyhow::Result;
use parlor_games::{
    GameRng, HumanPlayer, InputProvider, Match, MatchEvent, MoveSource, Observer, Participant, Role,
    Round, Seat, seeded_rng,
};
use std::cell::RefCell;
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

const YES: &[&str] = &["y", "yes"];
const NO: &[&str] = &["n", "no"];

/// Everything a game needs to talk to the person at the terminal.
pub struct Session<In, Out> {
    console: SharedConsole<In, Out>,
    renderer: ConsoleRenderer<Out>,
    autoplay: bool,
    seed: Option<u64>,
}

impl Session<StdinLock<'static>, Stdout> {
    /// Session on the process's stdin and stdout.
    pub fn stdio(autoplay: bool, seed: Option<u64>) -> Self {
        Self::new(
            ConsoleInput::stdio(),
            ConsoleRenderer::stdout(),
            autoplay,
            seed,
        )
    }
}

impl<In, Out> Session<In, Out>
where
    In: BufRead + 'static,
    Out: Write + 'static,
{
    /// Creates a session over the given console and renderer.
    pub fn new(
        console: ConsoleInput<In, Out>,
        renderer: ConsoleRenderer<Out>,
        autoplay: bool,
        seed: Option<u64>,
    ) -> Self {
        Self {
            console: Rc::new(RefCell::new(console)),
            renderer,
            autoplay,
            seed,
        }
    }

    /// Seeds are offset per consumer so agents do not mirror each other.
    pub fn rng(&self, offset: u64) -> GameRng {
        seeded_rng(self.seed.map(|seed| seed.wrapping_add(offset)))
    }

    /// The human seat, or a stand-in agent under `--autoplay`.
    pub fn human<R: Round>(&self, seat: Seat, agent: Box<dyn MoveSource<R>>) -> Participant<R>
    where
        SharedConsole<In, Out>: InputProvider<R::Move>,
    {
        if self.autoplay {
            Participant::new(seat, Role::Agent, "You (auto)", agent)
        } else {
            Participant::new(
                seat,
                Role::Human,
                "You",
                Box::new(HumanPlayer::new(Rc::clone(&self.console))),
            )
        }
    }

    fn ask(&self, prompt: &str, yes: &[&str], no: &[&str]) -> Result<bool> {
        if self.autoplay {
            return Ok(true);
        }
        Ok(self.console.borrow_mut().confirm(prompt, yes, no)?)
    }

    /// Runs the welcome, the match and the goodbye.
    ///
    /// A match the player walks away from still gets its final standing.
    #[instrument(skip_all, fields(title = %title))]
    pub fn run<R, L>(&mut self, title: &str, intro: &str, mut game: Match<R, L>) -> Result<()>
    where
        R: Round,
        L: Standings,
        ConsoleRenderer<Out>: Observer<R, L>,
    {
        self.renderer.line(format!("Welcome to {}!", title));
        self.renderer.line(intro);

        if !self.ask(
            "Enter 'S' to start the match or 'Q' to quit: ",
            &["s", "start"],
            &["q", "quit"],
        )? {
            self.renderer.line(format!("Thanks for playing {}! Goodbye!", title));
            return Ok(());
        }

        info!(title, "Match starting");
        let opening = MatchEvent::RoundStarted {
            number: game.round_number(),
            starter: game.starter(),
        };
        self.renderer.notify(&opening, &game);

        let mut prompt_error = None;
        let console = Rc::clone(&self.console);
        let autoplay = self.autoplay;
        let winner = game.play(&mut self.renderer, |_| {
            if autoplay {
                return true;
            }
            match console
                .borrow_mut()
                .confirm("Would you like to play again? (Y/N): ", YES, NO)
            {
                Ok(again) => again,
                Err(e) => {
                    prompt_error = Some(e);
                    false
                }
            }
        })?;
        if let Some(e) = prompt_error {
            return Err(e.into());
        }
        debug!(?winner, rounds = game.round_number(), "Match finished");
        if winner.is_none() && !game.is_complete() {
            self.renderer.match_result(None, &game);
        }

        self.renderer.line(format!("Thanks for playing {}! Goodbye!", title));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_games::{BoardAgent, BoardRound, BoardRules, MatchSettings, ScoreLedger};
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(input: &str) -> TestSession {
        Session::new(
            ConsoleInput::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
            ConsoleRenderer::new(Vec::new()),
            false,
            Some(7),
        )
    }

    fn board_match(session: &TestSession) -> Match<BoardRound, ScoreLedger> {
        let players: [Participant<BoardRound>; 2] = [
            Participant::new(
                Seat::A,
                Role::Agent,
                "You",
                Box::new(BoardAgent::new(session.rng(1))),
            ),
            Participant::new(
                Seat::B,
                Role::Agent,
                "Computer",
                Box::new(BoardAgent::new(session.rng(2))),
            ),
        ];
        Match::new(
            BoardRules::default(),
            players,
            ScoreLedger::new(3).unwrap(),
            MatchSettings::default(),
            Box::new(session.rng(0)),
        )
        .unwrap()
    }

    /// Runs one tic-tac-toe session and returns what the console and the
    /// renderer printed.
    fn transcripts(input: &str) -> (String, String) {
        let mut session = session(input);
        let game = board_match(&session);
        session.run("Tic Tac Toe", "Intro.", game).unwrap();
        let Session {
            console, renderer, ..
        } = session;
        let console = Rc::try_unwrap(console)
            .ok()
            .unwrap()
            .into_inner()
            .into_writer();
        (
            String::from_utf8(console).unwrap(),
            String::from_utf8(renderer.into_inner()).unwrap(),
        )
    }

    #[test]
    fn test_quit_right_after_welcome() {
        let (prompts, text) = transcripts("q\n");
        assert!(prompts.contains("Enter 'S' to start the match or 'Q' to quit: "));
        assert!(!prompts.contains("play again"));
        assert_eq!(
            text,
            "Welcome to Tic Tac Toe!\nIntro.\nThanks for playing Tic Tac Toe! Goodbye!\n"
        );
    }

    #[test]
    fn test_declining_a_rematch_prints_result_then_goodbye() {
        let (prompts, text) = transcripts("s\nn\n");
        assert_eq!(prompts.matches("Would you like to play again?").count(), 1);
        assert!(text.contains("\nRound 1."));

        let result = text
            .find("The match ends undecided after 1 round.")
            .unwrap();
        let standing = text.find("Final score: You ").unwrap();
        let goodbye = text.find("Thanks for playing Tic Tac Toe! Goodbye!").unwrap();
        assert!(result < standing);
        assert!(standing < goodbye);
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let (prompts, text) = transcripts("x\ns\nn\n");
        assert_eq!(prompts.matches("Sorry, invalid choice.").count(), 1);
        assert_eq!(prompts.matches("Enter 'S' to start").count(), 2);
        assert!(text.contains("Final score:"));
    }

    #[test]
    fn test_end_of_input_at_rematch_prompt_is_an_error() {
        let mut session = session("s\n");
        let game = board_match(&session);
        assert!(session.run("Tic Tac Toe", "Intro.", game).is_err());
    }
}
