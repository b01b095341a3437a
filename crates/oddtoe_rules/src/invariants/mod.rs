//! First-class invariants for the rules engine.
//!
//! Invariants are logical properties that must hold after every
//! placement. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(v) => v,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

mod mark_balance;
mod outcome_consistent;
mod square_board;

pub use mark_balance::MarkBalance;
pub use outcome_consistent::OutcomeConsistent;
pub use square_board::SquareBoard;

/// Every engine invariant as a composable set.
///
/// [`MarkBalance`] is included for callers that enforce alternation;
/// the engine itself only asserts the first two.
pub type EngineInvariants = (SquareBoard, OutcomeConsistent, MarkBalance);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, RulesEngine};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = RulesEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_alternating_moves() {
        let mut engine = RulesEngine::with_size(5).unwrap();
        engine.place(Mark::X, 0, 0);
        engine.place(Mark::O, 2, 2);
        engine.place(Mark::X, 4, 1);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = RulesEngine::new();
        engine.place(Mark::X, 0, 0);
        engine.place(Mark::X, 0, 1);
        engine.place(Mark::X, 1, 1);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MarkBalance::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = RulesEngine::new();
        type Structural = (SquareBoard, OutcomeConsistent);
        assert!(Structural::check_all(&engine).is_ok());
    }
}
