//! Typed interaction events sent from a presenter to the session.

use oddtoe_rules::Coordinate;

/// Something the user did that the session must react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The board size selector settled on a new value, as raw text.
    LengthChanged(String),
    /// A cell was picked. Coordinates may arrive as text.
    CellSelected {
        /// Row of the picked cell.
        row: Coordinate,
        /// Column of the picked cell.
        col: Coordinate,
    },
    /// Start the next round at the current size.
    NextRound,
    /// Zero the scoreboard and forget past rounds.
    ClearScores,
}

impl InputEvent {
    /// Convenience constructor for a size change.
    pub fn length(value: impl ToString) -> Self {
        InputEvent::LengthChanged(value.to_string())
    }

    /// Convenience constructor for a cell pick.
    pub fn cell(row: impl Into<Coordinate>, col: impl Into<Coordinate>) -> Self {
        InputEvent::CellSelected {
            row: row.into(),
            col: col.into(),
        }
    }
}
