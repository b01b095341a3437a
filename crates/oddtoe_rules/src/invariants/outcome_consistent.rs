//! Outcome invariant: the stored outcome matches the board.

use super::Invariant;
use crate::{RulesEngine, rules};

/// Invariant: re-evaluating the board yields the stored outcome.
///
/// Holds because the outcome is recomputed on every accepted placement
/// and cleared on every board replacement.
pub struct OutcomeConsistent;

impl Invariant<RulesEngine> for OutcomeConsistent {
    fn holds(engine: &RulesEngine) -> bool {
        rules::evaluate(engine.board()) == engine.outcome()
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Outcome};

    #[test]
    fn test_holds_through_a_win() {
        let mut engine = RulesEngine::new();
        for (r, c) in [(0, 0), (1, 1), (2, 2)] {
            engine.place(Mark::X, r, c);
            assert!(OutcomeConsistent::holds(&engine));
        }
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut engine = RulesEngine::new();
        *engine.parts_mut().1 = Outcome::Draw;
        assert!(!OutcomeConsistent::holds(&engine));
    }
}
