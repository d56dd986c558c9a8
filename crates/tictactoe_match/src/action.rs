//! Accepted moves.

use crate::board::Coord;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// A move the engine accepted: a player claiming a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The player who claimed the cell.
    pub player: Player,
    /// The claimed cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the claimed cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}
