//! Parlor - console front end
//!
//! Plays one of the parlor games against the computer in the terminal.

#![warn(missing_docs)]

mod cli;
mod console;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use parlor_games::{
    BoardAgent, BoardRound, DEALER, DealerAgent, GameConfig, GestureAgent, GestureRound, Match,
    MatchSettings, PLAYER, Participant, Role, Seat, TwentyOneRound,
};
use session::Session;
use std::io::{StdinLock, Stdout};
use tracing_subscriber::EnvFilter;

type Terminal = Session<StdinLock<'static>, Stdout>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }

    let session = Session::stdio(cli.autoplay, *config.seed());

    match cli.command {
        Command::Rps {
            variant,
            score_limit,
        } => {
            let mut rps = config.rps().clone();
            if let Some(variant) = variant {
                rps = rps.with_variant(variant);
            }
            if let Some(limit) = score_limit {
                rps = rps.with_score_limit(limit);
            }
            run_rps(session, &config.with_rps(rps))
        }
        Command::TicTacToe {
            score_limit,
            computer_first,
        } => {
            let mut tictactoe = config.tictactoe().clone();
            if let Some(limit) = score_limit {
                tictactoe = tictactoe.with_score_limit(limit);
            }
            if computer_first {
                tictactoe = tictactoe.with_human_first(false);
            }
            run_tictactoe(session, &config.with_tictactoe(tictactoe))
        }
        Command::TwentyOne => run_twentyone(session, &config),
    }
}

fn run_rps(mut session: Terminal, config: &GameConfig) -> Result<()> {
    let players: [Participant<GestureRound>; 2] = [
        session.human(Seat::A, Box::new(GestureAgent::new(session.rng(1)))),
        Participant::new(
            Seat::B,
            Role::Agent,
            "Computer",
            Box::new(GestureAgent::new(session.rng(2))),
        ),
    ];
    let ledger = config.score_ledger_rps()?;
    let intro = format!(
        "Gestures in play: {}. The first to {} wins the match!",
        console::join_or(&config.gesture_rules()?.relation().gestures()),
        ledger.threshold()
    );
    let game = Match::new(
        config.gesture_rules()?,
        players,
        ledger,
        MatchSettings::default(),
        Box::new(session.rng(0)),
    )?;
    session.run("Rock, Paper, Scissors", &intro, game)
}

fn run_tictactoe(mut session: Terminal, config: &GameConfig) -> Result<()> {
    let players: [Participant<BoardRound>; 2] = [
        session.human(Seat::A, Box::new(BoardAgent::new(session.rng(1)))),
        Participant::new(
            Seat::B,
            Role::Agent,
            "Computer",
            Box::new(BoardAgent::new(session.rng(2))),
        ),
    ];
    let ledger = config.score_ledger_tictactoe()?;
    let intro = format!(
        "You are X, the computer is O. The first to {} between you and the computer wins the match!",
        ledger.threshold()
    );
    let settings = MatchSettings::new(
        config.tictactoe_first_mover(),
        *config.tictactoe().alternate_first_mover(),
    );
    let game = Match::new(
        config.board_rules(),
        players,
        ledger,
        settings,
        Box::new(session.rng(0)),
    )?;
    session.run("Tic Tac Toe", &intro, game)
}

fn run_twentyone(mut session: Terminal, config: &GameConfig) -> Result<()> {
    let rules = config.twentyone_rules()?;
    let players: [Participant<TwentyOneRound>; 2] = [
        session.human(PLAYER, Box::new(DealerAgent)),
        Participant::new(DEALER, Role::Agent, "Dealer", Box::new(DealerAgent)),
    ];
    let ledger = config.purse_ledger()?;
    let intro = format!(
        "You start with {} in your purse. Reach {} to win; hit 0 and the house wins. \
         Cards over {} bust, and the dealer stands on {}.",
        ledger.purse(),
        ledger.winning_purse(),
        rules.bust_limit(),
        rules.dealer_stands_at()
    );
    let game = Match::new(
        rules,
        players,
        ledger,
        MatchSettings::default(),
        Box::new(session.rng(0)),
    )?;
    session.run("Twenty-One", &intro, game)
}
