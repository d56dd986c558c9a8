//! Alternating turn invariant: the turn flips after every accepted move.

use super::Invariant;
use crate::config::TurnPolicy;
use crate::engine::MatchEngine;

/// Invariant: the first player is up after an even number of accepted
/// moves, the second after an odd number.
///
/// Under the strict policy the history itself must also alternate, starting
/// with the first player.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchEngine> for AlternatingTurnInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let history = engine.history();

        let expected_next = if history.len() % 2 == 0 {
            engine.first()
        } else {
            engine.second()
        };
        if engine.current_turn() != expected_next {
            return false;
        }

        if engine.turn_policy() == TurnPolicy::Strict {
            return history.iter().enumerate().all(|(i, mov)| {
                let expected = if i % 2 == 0 {
                    engine.first()
                } else {
                    engine.second()
                };
                mov.player() == expected
            });
        }

        true
    }

    fn description() -> &'static str {
        "Turn alternates between first and second player"
    }
}
