//! Square board storage.

use super::size::BoardSize;
use super::types::{Cell, Mark};
use serde::Serialize;
use tracing::instrument;

/// An N×N board of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length as a plain integer.
    pub fn side(&self) -> usize {
        self.size.get()
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Writes a mark into `(row, col)`.
    ///
    /// Only the rules engine writes cells, after it has checked bounds
    /// and occupancy.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Cell::Marked(mark);
        }
    }

    /// True if `(row, col)` is on the board and unmarked.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Number of marked cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| c.mark() == Some(mark))
            .count()
    }

    /// True when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Copies the grid out as nested rows, for renderers.
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Raw cell access for corrupting boards in invariant tests.
    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.side();
        (row < n && col < n).then_some(row * n + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{}", mark.symbol())?,
                }
            }
        }
        Ok(())
    }
}
