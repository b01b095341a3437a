//! The rules engine: one owned board and its outcome.

use crate::coordinate::Coordinate;
use crate::invariants::{InvariantSet, OutcomeConsistent, SquareBoard};
use crate::placement::{Placement, PlacementResult, Rejection};
use crate::rules;
use crate::size::{BoardSize, InvalidSizeError};
use crate::types::{Cell, Mark, Outcome};
use crate::Board;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe rules engine for odd-sized boards.
///
/// Owns the board and the outcome. The only mutation is [`place`];
/// [`reset`] and [`create_board`] replace the board wholesale.
/// Turn order is not enforced here.
///
/// [`place`]: RulesEngine::place
/// [`reset`]: RulesEngine::reset
/// [`create_board`]: RulesEngine::create_board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesEngine {
    board: Board,
    outcome: Outcome,
}

impl RulesEngine {
    /// Creates an engine with an empty 3×3 board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_size(BoardSize::CLASSIC)
    }

    /// Creates an engine with an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] unless `size` is an odd number from 3 to 99.
    #[track_caller]
    pub fn with_size<S>(size: S) -> Result<Self, InvalidSizeError>
    where
        S: TryInto<BoardSize, Error = InvalidSizeError> + std::fmt::Debug,
    {
        Ok(Self::from_size(size.try_into()?))
    }

    /// Creates an engine from an already validated size.
    pub fn from_size(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            outcome: Outcome::InProgress,
        }
    }

    /// Replaces the board with an empty one of a new size.
    ///
    /// On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] unless `size` is an odd number from 3 to 99.
    #[track_caller]
    #[instrument(skip(self), fields(old_size = self.board.side()))]
    pub fn create_board<S>(&mut self, size: S) -> Result<&Board, InvalidSizeError>
    where
        S: TryInto<BoardSize, Error = InvalidSizeError> + std::fmt::Debug,
    {
        let size = size.try_into().inspect_err(|e| {
            warn!(error = %e, "Refusing board size");
        })?;
        self.board = Board::new(size);
        self.outcome = Outcome::InProgress;
        info!(new_size = size.get(), "Created board");
        Ok(&self.board)
    }

    /// Alias of [`create_board`](RulesEngine::create_board).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] unless `size` is an odd number from 3 to 99.
    #[track_caller]
    pub fn resize<S>(&mut self, size: S) -> Result<&Board, InvalidSizeError>
    where
        S: TryInto<BoardSize, Error = InvalidSizeError> + std::fmt::Debug,
    {
        self.create_board(size)
    }

    /// Clears the board at the current size.
    #[instrument(skip(self), fields(size = self.board.side()))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.outcome = Outcome::InProgress;
        debug!("Board reset");
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Checks run in order: game over, mark validity, bounds, occupancy.
    /// A rejected placement leaves the engine untouched.
    #[instrument(skip_all, fields(size = self.board.side()))]
    pub fn place<M, R, C>(&mut self, mark: M, row: R, col: C) -> PlacementResult
    where
        M: TryInto<Mark> + std::fmt::Debug,
        R: Into<Coordinate>,
        C: Into<Coordinate>,
    {
        let rejection = |reason: Rejection| {
            debug!(%reason, "Placement rejected");
            PlacementResult::Rejected(reason)
        };

        if self.outcome.is_over() {
            return rejection(Rejection::GameOver);
        }

        let label = format!("{:?}", mark);
        let Ok(mark) = TryInto::<Mark>::try_into(mark) else {
            return rejection(Rejection::InvalidMark(label));
        };

        let (row, col) = (row.into(), col.into());
        let side = self.board.side();
        let (Some(r), Some(c)) = (row.resolve(side), col.resolve(side)) else {
            return rejection(Rejection::OutOfBounds { row, col });
        };

        if let Some(Cell::Marked(by)) = self.board.get(r, c) {
            return rejection(Rejection::Occupied { row: r, col: c, by });
        }

        self.board.set(r, c, mark);
        self.outcome = rules::evaluate(&self.board);
        debug_assert!(
            <(SquareBoard, OutcomeConsistent) as InvariantSet<Self>>::check_all(self).is_ok(),
            "Engine invariants violated after placement"
        );

        info!(row = r, col = c, %mark, outcome = %self.outcome, "Mark placed");

        PlacementResult::Placed(Placement {
            row: r,
            col: c,
            mark,
            outcome: self.outcome,
        })
    }

    /// The winning mark, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Current board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Borrow the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the whole grid for rendering.
    pub fn game_board(&self) -> Vec<Vec<Cell>> {
        self.board.to_grid()
    }

    /// Mutable access for invariant tests.
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut Board, &mut Outcome) {
        (&mut self.board, &mut self.outcome)
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_classic() {
        let engine = RulesEngine::new();
        assert_eq!(engine.size(), BoardSize::CLASSIC);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_place_reports_position() {
        let mut engine = RulesEngine::new();
        let result = engine.place(Mark::X, 1, 2);
        assert_eq!(
            result,
            PlacementResult::Placed(Placement {
                row: 1,
                col: 2,
                mark: Mark::X,
                outcome: Outcome::InProgress,
            })
        );
        assert_eq!(engine.board().get(1, 2), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_game_over_checked_before_mark() {
        let mut engine = RulesEngine::new();
        for c in 0..3 {
            engine.place(Mark::O, 0, c);
        }
        assert_eq!(
            engine.place("NONE", 9, 9).rejection(),
            Some(&Rejection::GameOver)
        );
    }

    #[test]
    fn test_mark_checked_before_bounds() {
        let mut engine = RulesEngine::new();
        let result = engine.place("DRAW", 7, 7);
        assert!(matches!(result.rejection(), Some(Rejection::InvalidMark(_))));
    }

    #[test]
    fn test_string_mark_accepted() {
        let mut engine = RulesEngine::new();
        assert!(engine.place("O", "0", "0").is_valid());
        assert_eq!(engine.board().get(0, 0), Some(Cell::Marked(Mark::O)));
    }

    #[test]
    fn test_lowercase_or_padded_mark_rejected() {
        let mut engine = RulesEngine::new();
        for mark in ["x", " o ", "X "] {
            assert!(matches!(
                engine.place(mark, 0, 0).rejection(),
                Some(Rejection::InvalidMark(_))
            ));
        }
        assert!(matches!(
            engine.place('o', 1, 1).rejection(),
            Some(Rejection::InvalidMark(_))
        ));
        assert_eq!(engine.board().filled_count(), 0);
    }

    #[test]
    fn test_last_column_is_out_of_bounds() {
        let mut engine = RulesEngine::new();
        let result = engine.place(Mark::X, 0, 3);
        assert!(matches!(result.rejection(), Some(Rejection::OutOfBounds { .. })));
    }

    #[test]
    fn test_occupied_reports_owner() {
        let mut engine = RulesEngine::new();
        engine.place(Mark::X, 1, 1);
        assert_eq!(
            engine.place(Mark::O, 1, 1).rejection(),
            Some(&Rejection::Occupied {
                row: 1,
                col: 1,
                by: Mark::X
            })
        );
    }

    #[test]
    fn test_failed_resize_keeps_board() {
        let mut engine = RulesEngine::with_size(5).unwrap();
        engine.place(Mark::X, 4, 4);
        let before = engine.clone();
        assert!(engine.create_board(6).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_resize_clears_outcome() {
        let mut engine = RulesEngine::new();
        for c in 0..3 {
            engine.place(Mark::X, 2, c);
        }
        assert!(engine.is_over());
        let board = engine.resize(7).unwrap();
        assert_eq!(board.side(), 7);
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }
}
