//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; they can also be
//! tested independently.

mod alternating_turn;
mod consistent_state;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use consistent_state::ConsistentStateInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::engine::MatchEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ConsistentStateInvariant,
);

/// Checks every match invariant against `engine`.
pub fn check(engine: &MatchEngine) -> Result<(), Vec<InvariantViolation>> {
    MatchInvariants::check_all(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Player, PlayerRole};

    fn engine() -> MatchEngine {
        MatchEngine::new(Player::new(PlayerRole::First), Player::new(PlayerRole::Second)).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_empty_match() {
        assert!(check(&engine()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = engine();
        let (x, o) = (engine.first().clone(), engine.second().clone());
        engine.attempt_move(&x, 0, 0);
        engine.attempt_move(&o, 1, 1);
        engine.attempt_move(&x, 0, 2);
        assert!(check(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = engine();
        let x = engine.first().clone();
        engine.attempt_move(&x, 1, 1);

        // Corrupt the board behind the engine's back
        let o = engine.second().clone();
        engine.board.occupy(0, 0, o).unwrap();

        let violations = check(&engine).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoardInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&engine()).is_ok());
    }
}
