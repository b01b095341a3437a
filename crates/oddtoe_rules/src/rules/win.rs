//! Win detection logic.
//!
//! Every line is scanned from its first cell. A line wins only when the
//! run starting at index 0 stays unbroken and equal to the last index;
//! the scan stops at the first empty or differing cell.

use crate::{Board, Cell, Mark};
use serde::Serialize;
use tracing::{instrument, trace};

/// A row, column or diagonal of length N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// The `i`-th `(row, col)` of this line on a board of side `side`.
    pub fn position(self, i: usize, side: usize) -> (usize, usize) {
        match self {
            Line::Row(r) => (r, i),
            Line::Column(c) => (i, c),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (side - 1 - i, i),
        }
    }

    /// All positions of this line in scan order.
    pub fn positions(self, side: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..side).map(move |i| self.position(i, side))
    }
}

/// Every line in evaluation order: rows, columns, main diagonal, anti-diagonal.
pub fn lines(side: usize) -> impl Iterator<Item = Line> {
    (0..side)
        .map(Line::Row)
        .chain((0..side).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

/// Scans one line from index 0.
///
/// Returns the mark if the run anchored at the first cell reaches the
/// last cell unbroken.
pub fn scan_line(board: &Board, line: Line) -> Option<Mark> {
    let side = board.side();
    let mut previous: Option<Mark> = None;

    for (i, (row, col)) in line.positions(side).enumerate() {
        let mark = match board.get(row, col) {
            Some(Cell::Marked(mark)) => mark,
            Some(Cell::Empty) | None => return None,
        };

        if i > 0 && previous != Some(mark) {
            return None;
        }
        previous = Some(mark);
    }

    previous
}

/// Finds the first winning line and its mark.
#[instrument(skip(board), fields(side = board.side()))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    lines(board.side()).find_map(|line| {
        let winner = scan_line(board, line)?;
        trace!(?line, %winner, "Line completed");
        Some((line, winner))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first completed line in evaluation
/// order, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
