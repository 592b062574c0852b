//! Match configuration loaded from TOML.

use crate::error::ConfigError;
use crate::games::gesture::{BeatsRelation, GestureRules, GestureVariant};
use crate::games::tictactoe::{BoardRules, WinningLines};
use crate::games::twentyone::{BUST_LIMIT, TwentyOneRules};
use crate::ledger::{PurseLedger, ScoreLedger};
use crate::seat::Seat;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rock-paper-scissors settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct RpsConfig {
    /// Gesture set in play.
    variant: GestureVariant,
    /// Wins needed to take the match.
    score_limit: u32,
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self {
            variant: GestureVariant::Classic,
            score_limit: 5,
        }
    }
}

/// Tic-tac-toe settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Wins needed to take the match.
    score_limit: u32,
    /// Whether the opener swaps between rounds.
    alternate_first_mover: bool,
    /// Whether the human opens the first round.
    human_first: bool,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            score_limit: 3,
            alternate_first_mover: true,
            human_first: true,
        }
    }
}

/// Twenty-one settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TwentyOneConfig {
    /// Hands worth more than this are bust.
    bust_limit: u32,
    /// The dealer stays at or above this value.
    dealer_stands_at: u32,
    /// Purse at the start of the match.
    starting_purse: u32,
    /// Purse that wins the match.
    winning_purse: u32,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            bust_limit: BUST_LIMIT,
            dealer_stands_at: 17,
            starting_purse: 5,
            winning_purse: 10,
        }
    }
}

/// Top-level configuration for all games.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; entropy when absent.
    seed: Option<u64>,
    /// Rock-paper-scissors section.
    rps: RpsConfig,
    /// Tic-tac-toe section.
    tictactoe: TicTacToeConfig,
    /// Twenty-one section.
    twentyone: TwentyOneConfig,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects inconsistent values by building every rule table once.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture_rules()?;
        self.score_ledger_rps()?;
        self.score_ledger_tictactoe()?;
        self.twentyone_rules()?;
        self.purse_ledger()?;
        Ok(())
    }

    /// Gesture rules for the configured variant.
    pub fn gesture_rules(&self) -> Result<GestureRules, ConfigError> {
        Ok(GestureRules::new(BeatsRelation::for_variant(self.rps.variant)?))
    }

    /// Score ledger for rock-paper-scissors.
    pub fn score_ledger_rps(&self) -> Result<ScoreLedger, ConfigError> {
        ScoreLedger::new(self.rps.score_limit)
    }

    /// Board rules with the standard line table.
    pub fn board_rules(&self) -> BoardRules {
        BoardRules::new(WinningLines::standard())
    }

    /// Score ledger for tic-tac-toe.
    pub fn score_ledger_tictactoe(&self) -> Result<ScoreLedger, ConfigError> {
        ScoreLedger::new(self.tictactoe.score_limit)
    }

    /// Seat that opens the first tic-tac-toe round.
    pub fn tictactoe_first_mover(&self) -> Seat {
        if self.tictactoe.human_first { Seat::A } else { Seat::B }
    }

    /// Twenty-one table rules.
    pub fn twentyone_rules(&self) -> Result<TwentyOneRules, ConfigError> {
        TwentyOneRules::new(self.twentyone.bust_limit, self.twentyone.dealer_stands_at)
    }

    /// Purse ledger for the twenty-one player.
    pub fn purse_ledger(&self) -> Result<PurseLedger, ConfigError> {
        PurseLedger::new(
            Seat::A,
            self.twentyone.starting_purse,
            self.twentyone.winning_purse,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.rps().score_limit(), 5);
        assert_eq!(*config.tictactoe().score_limit(), 3);
        assert_eq!(*config.twentyone().winning_purse(), 10);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_sections() {
        let config = GameConfig::from_toml(
            r#"
            seed = 9

            [rps]
            variant = "lizard-spock"

            [tictactoe]
            human_first = false
            "#,
        )
        .unwrap();
        assert_eq!(config.seed(), &Some(9));
        assert_eq!(*config.rps().variant(), GestureVariant::LizardSpock);
        assert_eq!(*config.rps().score_limit(), 5);
        assert_eq!(config.tictactoe_first_mover(), Seat::B);
        assert_eq!(config.gesture_rules().unwrap().relation().gestures().len(), 5);
    }

    #[test]
    fn test_inconsistent_purse_rejected() {
        let err = GameConfig::from_toml(
            r#"
            [twentyone]
            starting_purse = 10
            winning_purse = 10
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("Winning purse"));
    }

    #[test]
    fn test_zero_score_limit_rejected() {
        assert!(GameConfig::from_toml("[tictactoe]\nscore_limit = 0\n").is_err());
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = GameConfig::from_toml("[rps]\nvariant = \"dynamite\"\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_rps(RpsConfig::default().with_score_limit(2))
            .with_seed(Some(1));
        assert_eq!(*config.rps().score_limit(), 2);
        assert!(config.validate().is_ok());
    }
}
