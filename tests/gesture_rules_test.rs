//! Gesture relations and full rock-paper-scissors matches.

use parlor_games::{
    BeatsRelation, EventLog, Gesture, GestureAgent, GestureRound, GestureRules, GestureVariant,
    HumanPlayer, Match, MatchEvent, MatchSettings, MatchState, Outcome, Participant, Role,
    ScoreLedger, ScriptedInput, Seat, evaluate_gesture, seeded_rng,
};
use proptest::prelude::*;

const ALL: [Gesture; 5] = [
    Gesture::Rock,
    Gesture::Paper,
    Gesture::Scissors,
    Gesture::Lizard,
    Gesture::Spock,
];

#[test]
fn test_classic_table() {
    let relation = BeatsRelation::classic().unwrap();
    assert_eq!(
        evaluate_gesture(Gesture::Rock, Gesture::Scissors, &relation),
        Outcome::Win(Seat::A)
    );
    assert_eq!(
        evaluate_gesture(Gesture::Rock, Gesture::Paper, &relation),
        Outcome::Win(Seat::B)
    );
    assert_eq!(relation.gestures().len(), 3);
}

#[test]
fn test_lizard_spock_additions() {
    let relation = BeatsRelation::for_variant(GestureVariant::LizardSpock).unwrap();
    assert!(relation.beats(Gesture::Spock, Gesture::Scissors));
    assert!(relation.beats(Gesture::Lizard, Gesture::Spock));
    assert!(relation.beats(Gesture::Paper, Gesture::Spock));
    assert!(!relation.beats(Gesture::Spock, Gesture::Paper));
}

#[test]
fn test_lopsided_table_rejected() {
    let table: [(Gesture, &[Gesture]); 3] = [
        (Gesture::Rock, &[Gesture::Scissors]),
        (Gesture::Paper, &[Gesture::Rock]),
        (Gesture::Scissors, &[]),
    ];
    let err = BeatsRelation::new(table).unwrap_err();
    assert!(err.message.contains("undecided"));
}

#[test]
fn test_scripted_match_to_two() {
    let players: [Participant<GestureRound>; 2] = [
        Participant::new(
            Seat::A,
            Role::Human,
            "You",
            Box::new(HumanPlayer::new(ScriptedInput::new([
                Gesture::Rock,
                Gesture::Paper,
                Gesture::Scissors,
            ]))),
        ),
        Participant::new(
            Seat::B,
            Role::Human,
            "Rival",
            Box::new(HumanPlayer::new(ScriptedInput::new([
                Gesture::Scissors,
                Gesture::Paper,
                Gesture::Paper,
            ]))),
        ),
    ];
    let mut game = Match::new(
        GestureRules::new(BeatsRelation::classic().unwrap()),
        players,
        ScoreLedger::new(2).unwrap(),
        MatchSettings::default(),
        Box::new(seeded_rng(Some(0))),
    )
    .unwrap();
    let mut log: EventLog<Gesture> = EventLog::new();
    let winner = game.play(&mut log, |_| true).unwrap();

    assert_eq!(winner, Some(Seat::A));
    assert_eq!(game.state(), MatchState::MatchComplete(Some(Seat::A)));
    assert_eq!(game.round_number(), 3);
    let results: Vec<Outcome> = log
        .events()
        .iter()
        .filter_map(|event| match event {
            MatchEvent::RoundComplete(outcome) => Some(*outcome),
            _ => None,
        })
        .collect();
    assert_eq!(
        results,
        vec![Outcome::Win(Seat::A), Outcome::Tie, Outcome::Win(Seat::A)]
    );
}

#[test]
fn test_agents_play_out_a_match() {
    let players: [Participant<GestureRound>; 2] = [
        Participant::new(
            Seat::A,
            Role::Agent,
            "Left",
            Box::new(GestureAgent::new(seeded_rng(Some(11)))),
        ),
        Participant::new(
            Seat::B,
            Role::Agent,
            "Right",
            Box::new(GestureAgent::new(seeded_rng(Some(12)))),
        ),
    ];
    let mut game = Match::new(
        GestureRules::new(BeatsRelation::lizard_spock().unwrap()),
        players,
        ScoreLedger::new(5).unwrap(),
        MatchSettings::default(),
        Box::new(seeded_rng(Some(13))),
    )
    .unwrap();
    let mut log: EventLog<Gesture> = EventLog::new();
    let winner = game.play(&mut log, |_| true).unwrap();
    assert!(winner.is_some());
    assert!(game.is_complete());
}

proptest! {
    #[test]
    fn distinct_gestures_have_exactly_one_winner(
        a in prop::sample::select(ALL.to_vec()),
        b in prop::sample::select(ALL.to_vec()),
    ) {
        let relation = BeatsRelation::lizard_spock().unwrap();
        let outcome = evaluate_gesture(a, b, &relation);
        if a == b {
            prop_assert_eq!(outcome, Outcome::Tie);
        } else {
            prop_assert!(outcome.winner().is_some());
            prop_assert_ne!(relation.beats(a, b), relation.beats(b, a));
            let swapped = evaluate_gesture(b, a, &relation);
            prop_assert_eq!(swapped.winner(), outcome.winner().map(|s| s.opponent()));
        }
    }
}
