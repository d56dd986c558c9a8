//! Property tests over arbitrary board sizes and move sequences.

use proptest::prelude::*;
use tictactoe_match::{MatchEngine, MatchEvent, MatchState, Player, PlayerRole, invariants};

fn engine(side: usize) -> MatchEngine {
    MatchEngine::with_side(
        Player::new(PlayerRole::First),
        Player::new(PlayerRole::Second),
        side,
    )
    .expect("valid engine")
}

#[derive(Debug, Clone, Copy)]
enum LineChoice {
    Row(usize),
    Column(usize),
    Main,
    Anti,
}

fn line_coords(side: usize, line: LineChoice) -> Vec<(usize, usize)> {
    (0..side)
        .map(|i| match line {
            LineChoice::Row(r) => (r, i),
            LineChoice::Column(c) => (i, c),
            LineChoice::Main => (i, i),
            LineChoice::Anti => (i, side - 1 - i),
        })
        .collect()
}

fn line_strategy() -> impl Strategy<Value = (usize, LineChoice)> {
    (2usize..=6).prop_flat_map(|side| {
        let line = prop_oneof![
            (0..side).prop_map(LineChoice::Row),
            (0..side).prop_map(LineChoice::Column),
            Just(LineChoice::Main),
            Just(LineChoice::Anti),
        ];
        (Just(side), line)
    })
}

proptest! {
    #[test]
    fn test_completing_a_line_wins_immediately((side, line) in line_strategy()) {
        let mut engine = engine(side);
        let owner = engine.first().clone();
        let coords = line_coords(side, line);

        // The owner claims the line; the opponent is never asked to move, so
        // the lenient policy lets one player fill it alone.
        for (i, &(row, col)) in coords.iter().enumerate() {
            let events = engine.attempt_move(&owner, row, col);
            let expected = if i + 1 == coords.len() {
                MatchState::Won(owner.clone())
            } else {
                MatchState::InProgress
            };
            let expected = MatchEvent::MatchStatusChanged(expected);
            prop_assert_eq!(events.last(), Some(&expected));
        }
    }

    #[test]
    fn test_accepted_moves_alternate_and_rejections_change_nothing(
        side in 1usize..=5,
        moves in prop::collection::vec((0usize..6, 0usize..6, any::<bool>()), 0..40),
    ) {
        let mut engine = engine(side);
        let first = engine.first().clone();
        let second = engine.second().clone();

        for (row, col, as_first) in moves {
            let mover = if as_first { first.clone() } else { second.clone() };
            let board_before = engine.board().clone();
            let turn_before = engine.current_turn().clone();
            let state_before = engine.state().clone();
            let accepted_before = engine.history().len();

            let events = engine.attempt_move(&mover, row, col);
            let accepted = engine.history().len() > accepted_before;

            if accepted {
                let expected = if turn_before == first { &second } else { &first };
                prop_assert_eq!(engine.current_turn(), expected);
                prop_assert_eq!(events.len(), 2);
            } else {
                prop_assert!(events.len() <= 1);
                prop_assert_eq!(engine.board(), &board_before);
                prop_assert_eq!(engine.current_turn(), &turn_before);
                prop_assert_eq!(engine.state(), &state_before);
            }
            prop_assert!(invariants::check(&engine).is_ok());
        }
    }

    #[test]
    fn test_new_match_always_resets(
        side in 1usize..=5,
        moves in prop::collection::vec((0usize..5, 0usize..5), 0..30),
    ) {
        let mut engine = engine(side);
        for (row, col) in moves {
            let mover = engine.current_turn().clone();
            engine.attempt_move(&mover, row, col);
        }

        engine.new_match();
        prop_assert_eq!(engine.state(), &MatchState::InProgress);
        prop_assert_eq!(engine.current_turn(), engine.first());
        prop_assert_eq!(engine.board().occupied_count(), 0);
        prop_assert_eq!(engine.board().side(), side);
    }

    #[test]
    fn test_full_board_without_a_line_is_a_draw(
        side in 1usize..=5,
        moves in prop::collection::vec((0usize..5, 0usize..5), 0..60),
    ) {
        let mut engine = engine(side);
        for (row, col) in moves {
            let mover = engine.current_turn().clone();
            engine.attempt_move(&mover, row, col);
        }

        if engine.board().is_full() && engine.state().winner().is_none() {
            prop_assert_eq!(engine.state(), &MatchState::Draw);
        }
        if engine.state() == &MatchState::Draw {
            prop_assert!(engine.board().is_full());
        }
    }
}
