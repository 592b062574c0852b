//! Gestures and the rule sets built from them.

use serde::{Deserialize, Serialize};

/// A hand gesture.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// Rock.
    #[strum(to_string = "rock", serialize = "r")]
    Rock,
    /// Paper.
    #[strum(to_string = "paper", serialize = "p")]
    Paper,
    /// Scissors.
    #[strum(to_string = "scissors", serialize = "s")]
    Scissors,
    /// Lizard.
    #[strum(to_string = "lizard", serialize = "l")]
    Lizard,
    /// Spock.
    #[strum(to_string = "spock", serialize = "sp")]
    Spock,
}

/// Which set of gestures is in play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum GestureVariant {
    /// Rock, paper, scissors.
    #[default]
    Classic,
    /// Rock, paper, scissors, lizard, Spock.
    LizardSpock,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_gesture_names_and_shortcuts() {
        assert_eq!(Gesture::from_str("Rock"), Ok(Gesture::Rock));
        assert_eq!(Gesture::from_str("sp"), Ok(Gesture::Spock));
        assert_eq!(Gesture::from_str("s"), Ok(Gesture::Scissors));
        assert!(Gesture::from_str("dynamite").is_err());
    }

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Gesture::Lizard.to_string(), "lizard");
    }

    #[test]
    fn test_variant_parses_kebab_case() {
        assert_eq!(
            GestureVariant::from_str("lizard-spock"),
            Ok(GestureVariant::LizardSpock)
        );
    }
}
