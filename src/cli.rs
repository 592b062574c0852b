//! Command-line interface for parlor.

use clap::{Parser, Subcommand};
use parlor_games::GestureVariant;

/// Parlor - turn-based console games against the computer
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Rock-paper-scissors, tic-tac-toe and twenty-one against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PARLOR_CONFIG", global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for every random choice (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Let the computer play your seat too
    #[arg(long, global = true)]
    pub autoplay: bool,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rock, paper, scissors (optionally lizard, Spock)
    Rps {
        /// Gesture set: classic or lizard-spock
        #[arg(long)]
        variant: Option<GestureVariant>,

        /// Wins needed to take the match
        #[arg(long)]
        score_limit: Option<u32>,
    },

    /// Tic-tac-toe against the heuristic agent
    #[command(name = "tictactoe")]
    TicTacToe {
        /// Wins needed to take the match
        #[arg(long)]
        score_limit: Option<u32>,

        /// Let the computer open the first round
        #[arg(long)]
        computer_first: bool,
    },

    /// Twenty-one against a dealer who stands on 17
    #[command(name = "twentyone")]
    TwentyOne,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rps_overrides() {
        let cli = Cli::parse_from([
            "parlor",
            "--seed",
            "4",
            "rps",
            "--variant",
            "lizard-spock",
            "--score-limit",
            "2",
        ]);
        assert_eq!(cli.seed, Some(4));
        match cli.command {
            Command::Rps {
                variant,
                score_limit,
            } => {
                assert_eq!(variant, Some(GestureVariant::LizardSpock));
                assert_eq!(score_limit, Some(2));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["parlor", "tictactoe", "--autoplay", "--computer-first"]);
        assert!(cli.autoplay);
        assert!(matches!(
            cli.command,
            Command::TicTacToe {
                computer_first: true,
                ..
            }
        ));
    }
}
