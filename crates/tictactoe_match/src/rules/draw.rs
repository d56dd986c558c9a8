//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == board.side() * board.side()
}
