//! Board rounds, the heuristic agent, and random play.

use parlor_games::{
    Board, BoardAgent, BoardRound, BoardRules, BoardStatus, MoveSource, Outcome, Position,
    Posture, Round, RoundStatus, Seat, WinningLines, evaluate_board, seeded_rng, winners,
};
use proptest::prelude::*;

fn board(a: &[Position], b: &[Position]) -> Board {
    let mut board = Board::new();
    for pos in a {
        board.mark(*pos, Seat::A).unwrap();
    }
    for pos in b {
        board.mark(*pos, Seat::B).unwrap();
    }
    board
}

#[test]
fn test_full_board_without_line_is_tie() {
    use Position::*;
    // X O X
    // X O O
    // O X X
    let board = board(
        &[TopLeft, TopRight, MiddleLeft, BottomCenter, BottomRight],
        &[TopCenter, Center, MiddleRight, BottomLeft],
    );
    assert_eq!(
        evaluate_board(&board, &WinningLines::standard()),
        BoardStatus::Decided(Outcome::Tie)
    );
}

#[test]
fn test_win_on_last_square_beats_tie() {
    use Position::*;
    // X O X
    // O X O
    // O X X
    let board = board(
        &[TopLeft, TopRight, Center, BottomCenter, BottomRight],
        &[TopCenter, MiddleLeft, MiddleRight, BottomLeft],
    );
    assert_eq!(
        evaluate_board(&board, &WinningLines::standard()),
        BoardStatus::Decided(Outcome::Win(Seat::A))
    );
}

#[test]
fn test_agent_completes_own_line_before_blocking() {
    use Position::*;
    let board = board(&[TopLeft, TopCenter], &[MiddleLeft, Center]);
    let mut agent = BoardAgent::new(seeded_rng(Some(3)));
    let (pos, posture) = agent
        .choose(&board, &WinningLines::standard(), Seat::B)
        .unwrap();
    assert_eq!((pos, posture), (MiddleRight, Posture::Offensive));
}

#[test]
fn test_agent_blocks_then_takes_center() {
    use Position::*;
    let lines = WinningLines::standard();
    let mut agent = BoardAgent::new(seeded_rng(Some(3)));

    let threatened = board(&[TopLeft, TopCenter], &[BottomLeft]);
    assert_eq!(
        agent.choose(&threatened, &lines, Seat::B).unwrap(),
        (TopRight, Posture::Defensive)
    );

    let quiet = board(&[TopLeft], &[]);
    assert_eq!(
        agent.choose(&quiet, &lines, Seat::B).unwrap(),
        (Center, Posture::Positional)
    );
}

#[test]
fn test_agent_refuses_when_round_is_over() {
    let rules = BoardRules::default();
    let mut round = BoardRound::start(&rules, Seat::A, &mut seeded_rng(Some(0))).unwrap();
    for (seat, pos) in [
        (Seat::A, Position::TopLeft),
        (Seat::B, Position::Center),
        (Seat::A, Position::TopCenter),
        (Seat::B, Position::BottomRight),
        (Seat::A, Position::TopRight),
    ] {
        round.apply(seat, pos).unwrap();
    }
    assert_eq!(round.status(), RoundStatus::Complete(Outcome::Win(Seat::A)));
    let mut agent = BoardAgent::new(seeded_rng(Some(1)));
    assert!(agent.select_move(&round, Seat::B).is_err());
}

#[test]
fn test_two_agents_always_finish() {
    let rules = BoardRules::default();
    for seed in 0..20 {
        let mut rng = seeded_rng(Some(seed));
        let mut round = BoardRound::start(&rules, Seat::A, &mut rng).unwrap();
        let mut agents = [
            BoardAgent::new(seeded_rng(Some(seed + 100))),
            BoardAgent::new(seeded_rng(Some(seed + 200))),
        ];
        while let RoundStatus::AwaitingMove(seat) = round.status() {
            let mv = agents[seat.index()].select_move(&round, seat).unwrap();
            round.apply(seat, mv).unwrap();
        }
        assert!(round.history().len() <= 9);
    }
}

proptest! {
    #[test]
    fn random_legal_play_never_has_two_winners(
        first in prop::sample::select(vec![Seat::A, Seat::B]),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 9),
    ) {
        let rules = BoardRules::default();
        let mut round = BoardRound::start(&rules, first, &mut seeded_rng(Some(0))).unwrap();
        for pick in picks {
            let seat = match round.status() {
                RoundStatus::AwaitingMove(seat) => seat,
                RoundStatus::Complete(_) => break,
            };
            let legal = round.legal_moves(seat);
            prop_assert!(!legal.is_empty());
            round.apply(seat, legal[pick.index(legal.len())]).unwrap();
            prop_assert!(winners(round.board(), round.lines()).len() <= 1);
        }
        prop_assert!(matches!(round.status(), RoundStatus::Complete(_)));
    }
}
