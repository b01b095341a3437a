//! Square board invariant: the grid is always exactly N×N.

use super::Invariant;
use crate::RulesEngine;

/// Invariant: the cell count equals the side length squared.
pub struct SquareBoard;

impl Invariant<RulesEngine> for SquareBoard {
    fn holds(engine: &RulesEngine) -> bool {
        let board = engine.board();
        board.cells().len() == board.size().cell_count()
            && board.rows().all(|row| row.len() == board.side())
    }

    fn description() -> &'static str {
        "Board is exactly N×N"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_fresh_boards_hold() {
        for size in [3, 5, 9] {
            let engine = RulesEngine::with_size(size).unwrap();
            assert!(SquareBoard::holds(&engine));
        }
    }

    #[test]
    fn test_truncated_board_violates() {
        let mut engine = RulesEngine::new();
        engine.parts_mut().0.cells_mut().pop();
        assert!(!SquareBoard::holds(&engine));
    }

    #[test]
    fn test_padded_board_violates() {
        let mut engine = RulesEngine::new();
        engine.parts_mut().0.cells_mut().push(Cell::Empty);
        assert!(!SquareBoard::holds(&engine));
    }
}
