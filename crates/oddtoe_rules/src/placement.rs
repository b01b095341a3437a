//! Placement results.
//!
//! An illegal move is an expected, user-facing event, so the engine
//! reports it as a value rather than an error.

use super::coordinate::Coordinate;
use super::types::{Mark, Outcome};
use serde::Serialize;

/// A mark that was accepted onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Row the mark landed on.
    pub row: usize,
    /// Column the mark landed on.
    pub col: usize,
    /// The mark placed.
    pub mark: Mark,
    /// Outcome after this placement.
    pub outcome: Outcome,
}

impl Placement {
    /// True if this placement ended the game.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Rejection {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The mark input is not X or O.
    #[display("{} is not a valid mark", _0)]
    InvalidMark(String),
    /// Row or column falls outside the board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Row as supplied.
        row: Coordinate,
        /// Column as supplied.
        col: Coordinate,
    },
    /// The target cell already holds a mark.
    #[display("({}, {}) is already taken by {}", row, col, by)]
    Occupied {
        /// Row of the taken cell.
        row: usize,
        /// Column of the taken cell.
        col: usize,
        /// Mark already there.
        by: Mark,
    },
}

/// Result of [`RulesEngine::place`](crate::RulesEngine::place).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlacementResult {
    /// The mark was placed.
    Placed(Placement),
    /// The board is unchanged.
    Rejected(Rejection),
}

impl PlacementResult {
    /// True if the mark was placed.
    pub fn is_valid(&self) -> bool {
        matches!(self, PlacementResult::Placed(_))
    }

    /// The accepted placement, if any.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            PlacementResult::Placed(p) => Some(p),
            PlacementResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            PlacementResult::Placed(_) => None,
            PlacementResult::Rejected(r) => Some(r),
        }
    }

    /// True if the placement was accepted and ended the game.
    pub fn is_over(&self) -> bool {
        self.placement().is_some_and(Placement::is_over)
    }
}
