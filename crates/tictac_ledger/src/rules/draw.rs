//! Draw detection.

use super::win::detect_winner;
use crate::Board;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && detect_winner(board).is_none()
}
