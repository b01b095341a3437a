//! Game rules for odd-sized tic-tac-toe.
//!
//! Pure functions that evaluate a board. They never mutate it, so the
//! engine, the invariants and tests can share them.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_draw};
pub use win::{Line, check_winner, lines};
