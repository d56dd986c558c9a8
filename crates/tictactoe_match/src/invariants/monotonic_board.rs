//! Monotonic board invariant: cells never change once occupied.

use super::Invariant;
use crate::board::Board;
use crate::engine::MatchEngine;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed without
/// touching an occupied cell and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchEngine> for MonotonicBoardInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let mut reconstructed = Board::new(engine.board().side());

        for mov in engine.history() {
            let coord = mov.coord();
            if reconstructed
                .occupy(coord.row, coord.col, mov.player().clone())
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::board::Coord;
    use crate::player::{Player, PlayerRole};

    fn engine() -> MatchEngine {
        MatchEngine::new(Player::new(PlayerRole::First), Player::new(PlayerRole::Second)).unwrap()
    }

    #[test]
    fn test_empty_match_holds() {
        assert!(MonotonicBoardInvariant::holds(&engine()));
    }

    #[test]
    fn test_moves_hold() {
        let mut engine = engine();
        let (x, o) = (engine.first().clone(), engine.second().clone());
        engine.attempt_move(&x, 0, 0);
        engine.attempt_move(&o, 2, 2);
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut engine = engine();
        let (x, o) = (engine.first().clone(), engine.second().clone());
        engine.attempt_move(&x, 1, 1);
        engine.history.push(Move::new(o, Coord::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
