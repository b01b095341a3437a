//! Draw detection and full-board evaluation.

use super::win::check_winner;
use crate::{Board, Outcome};
use tracing::instrument;

/// A full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Classifies a board: a win beats a full board.
#[instrument(skip(board), fields(side = board.side(), filled = board.filled_count()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
