//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Highlighted cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Highlighted row.
    pub row: usize,
    /// Highlighted column.
    pub col: usize,
}

impl Cursor {
    /// Moves one step for an arrow or `hjkl` key, staying inside a board
    /// of side `side`. Other keys leave the cursor where it is.
    pub fn step(self, key: KeyCode, side: usize) -> Self {
        let last = side.saturating_sub(1);
        let Cursor { row, col } = self;
        match key {
            KeyCode::Up | KeyCode::Char('k') => Cursor { row: row.saturating_sub(1), col },
            KeyCode::Down | KeyCode::Char('j') => Cursor { row: (row + 1).min(last), col },
            KeyCode::Left | KeyCode::Char('h') => Cursor { row, col: col.saturating_sub(1) },
            KeyCode::Right | KeyCode::Char('l') => Cursor { row, col: (col + 1).min(last) },
            _ => self,
        }
    }

    /// Pulls the cursor back inside a board that just shrank.
    pub fn clamp(self, side: usize) -> Self {
        let last = side.saturating_sub(1);
        Cursor {
            row: self.row.min(last),
            col: self.col.min(last),
        }
    }

    /// Centre cell of a board of side `side`.
    pub fn centre(side: usize) -> Self {
        Cursor {
            row: side / 2,
            col: side / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_bounds() {
        let cursor = Cursor::default();
        assert_eq!(cursor.step(KeyCode::Right, 3), Cursor { row: 0, col: 1 });
        assert_eq!(cursor.step(KeyCode::Char('j'), 3), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn test_stops_at_edges() {
        let corner = Cursor { row: 4, col: 4 };
        assert_eq!(corner.step(KeyCode::Down, 5), corner);
        assert_eq!(corner.step(KeyCode::Right, 5), corner);
        assert_eq!(Cursor::default().step(KeyCode::Up, 5), Cursor::default());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let cursor = Cursor { row: 6, col: 2 };
        assert_eq!(cursor.clamp(5), Cursor { row: 4, col: 2 });
    }

    #[test]
    fn test_centre() {
        assert_eq!(Cursor::centre(7), Cursor { row: 3, col: 3 });
    }
}
