//! Beats relation and gesture evaluation.

use super::types::{Gesture, GestureVariant};
use crate::error::ConfigError;
use crate::seat::{Outcome, Seat};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

const CLASSIC: &[(Gesture, &[Gesture])] = &[
    (Gesture::Rock, &[Gesture::Scissors]),
    (Gesture::Paper, &[Gesture::Rock]),
    (Gesture::Scissors, &[Gesture::Paper]),
];

const LIZARD_SPOCK: &[(Gesture, &[Gesture])] = &[
    (Gesture::Rock, &[Gesture::Scissors, Gesture::Lizard]),
    (Gesture::Paper, &[Gesture::Rock, Gesture::Spock]),
    (Gesture::Scissors, &[Gesture::Paper, Gesture::Lizard]),
    (Gesture::Lizard, &[Gesture::Spock, Gesture::Paper]),
    (Gesture::Spock, &[Gesture::Scissors, Gesture::Rock]),
];

/// Which gestures each gesture defeats.
///
/// Only constructible through [`BeatsRelation::new`], so every instance is
/// well formed: no gesture beats itself, no pair beats each other, and every
/// pair of distinct gestures in play is decided one way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatsRelation {
    beats: BTreeMap<Gesture, BTreeSet<Gesture>>,
}

impl BeatsRelation {
    /// Validates and builds a relation from `(gesture, defeated)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the relation is empty, reflexive,
    /// symmetric for some pair, references a gesture that is not a key, or
    /// leaves a pair of distinct gestures undecided.
    #[instrument(skip(table))]
    pub fn new<'a, I>(table: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Gesture, &'a [Gesture])>,
    {
        let mut beats: BTreeMap<Gesture, BTreeSet<Gesture>> = BTreeMap::new();
        for (gesture, defeated) in table {
            if beats.contains_key(&gesture) {
                return Err(ConfigError::new(format!("Gesture {} listed twice", gesture)));
            }
            beats.insert(gesture, defeated.iter().copied().collect());
        }
        if beats.len() < 2 {
            return Err(ConfigError::new("A beats relation needs at least two gestures"));
        }

        for (gesture, defeated) in &beats {
            if defeated.contains(gesture) {
                return Err(ConfigError::new(format!("{} cannot beat itself", gesture)));
            }
            for loser in defeated {
                let Some(back) = beats.get(loser) else {
                    return Err(ConfigError::new(format!(
                        "{} beats {}, which is not in play",
                        gesture, loser
                    )));
                };
                if back.contains(gesture) {
                    return Err(ConfigError::new(format!(
                        "{} and {} beat each other",
                        gesture, loser
                    )));
                }
            }
        }

        let keys: Vec<Gesture> = beats.keys().copied().collect();
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                if !beats[a].contains(b) && !beats[b].contains(a) {
                    return Err(ConfigError::new(format!("{} versus {} is undecided", a, b)));
                }
            }
        }

        debug!(gestures = keys.len(), "Beats relation validated");
        Ok(Self { beats })
    }

    /// Builds the relation for a built-in variant.
    pub fn for_variant(variant: GestureVariant) -> Result<Self, ConfigError> {
        let table = match variant {
            GestureVariant::Classic => CLASSIC,
            GestureVariant::LizardSpock => LIZARD_SPOCK,
        };
        Self::new(table.iter().copied())
    }

    /// Rock, paper, scissors.
    pub fn classic() -> Result<Self, ConfigError> {
        Self::for_variant(GestureVariant::Classic)
    }

    /// Rock, paper, scissors, lizard, Spock.
    pub fn lizard_spock() -> Result<Self, ConfigError> {
        Self::for_variant(GestureVariant::LizardSpock)
    }

    /// Gestures in play, in declaration order.
    pub fn gestures(&self) -> Vec<Gesture> {
        self.beats.keys().copied().collect()
    }

    /// Returns true if `a` defeats `b`.
    pub fn beats(&self, a: Gesture, b: Gesture) -> bool {
        self.beats.get(&a).is_some_and(|defeated| defeated.contains(&b))
    }
}

/// Decides a single exchange between seat A's and seat B's gestures.
#[instrument(skip(relation))]
pub fn evaluate_gesture(a: Gesture, b: Gesture, relation: &BeatsRelation) -> Outcome {
    if relation.beats(a, b) {
        Outcome::Win(Seat::A)
    } else if relation.beats(b, a) {
        Outcome::Win(Seat::B)
    } else {
        Outcome::Tie
    }
}
