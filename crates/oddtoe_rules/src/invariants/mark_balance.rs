//! Mark balance invariant: alternating play keeps counts within one.

use super::Invariant;
use crate::{Mark, RulesEngine};
use tracing::warn;

/// Invariant: the number of X and O marks differ by at most one.
///
/// The engine does not enforce turn order, so this only holds when the
/// caller alternates marks.
pub struct MarkBalance;

impl Invariant<RulesEngine> for MarkBalance {
    fn holds(engine: &RulesEngine) -> bool {
        let board = engine.board();
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
