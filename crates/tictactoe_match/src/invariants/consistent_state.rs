//! Consistent state invariant: the stored state matches the board.

use super::Invariant;
use crate::engine::MatchEngine;
use crate::rules;

/// Invariant: the match state equals what the rules derive from the board.
pub struct ConsistentStateInvariant;

impl Invariant<MatchEngine> for ConsistentStateInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        *engine.state() == rules::evaluate(engine.board())
    }

    fn description() -> &'static str {
        "Match state agrees with the board"
    }
}
