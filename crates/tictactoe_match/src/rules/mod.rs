//! Win and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, line_winner};

use crate::board::Board;
use crate::state::MatchState;
use tracing::instrument;

/// Derives the match state from the board alone.
///
/// A winning line takes precedence over a full board.
#[instrument(skip(board), fields(side = board.side()))]
pub fn evaluate(board: &Board) -> MatchState {
    if let Some((winner, _)) = check_winner(board) {
        MatchState::Won(winner)
    } else if is_full(board) {
        MatchState::Draw
    } else {
        MatchState::InProgress
    }
}
