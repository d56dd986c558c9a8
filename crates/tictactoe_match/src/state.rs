//! Match status.

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Where a match stands.
///
/// Once `Draw` or `Won`, only starting a new match changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MatchState {
    /// Moves are still being accepted.
    #[display("in progress")]
    InProgress,
    /// The board filled up without a winning line.
    #[display("draw")]
    Draw,
    /// A player owns an entire line.
    #[display("won by {_0}")]
    Won(Player),
}

impl MatchState {
    /// Returns true for `Draw` and `Won`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchState::InProgress)
    }

    /// Returns the winner, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            MatchState::Won(player) => Some(player),
            _ => None,
        }
    }
}
