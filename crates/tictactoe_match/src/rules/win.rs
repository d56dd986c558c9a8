//! Win detection for N x N boards.

use crate::board::{Board, Line, LineKind, Occupancy};
use crate::player::{Player, PlayerId};
use std::collections::HashSet;
use tracing::instrument;

/// Applies the single-occupant rule to one line.
///
/// Any empty cell means the line cannot produce a winner yet. Otherwise the
/// line is won only if every cell holds the same player.
pub fn line_winner(line: &Line<'_>) -> Option<Player> {
    let mut occupants: HashSet<PlayerId> = HashSet::new();
    let mut candidate = None;

    for cell in line.cells() {
        match cell.occupancy() {
            Occupancy::Empty => return None,
            Occupancy::OccupiedBy(player) => {
                occupants.insert(player.id());
                candidate = Some(player);
            }
        }
    }

    if occupants.len() == 1 {
        candidate.cloned()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then the main diagonal, then
/// the anti-diagonal. The first winning line is reported.
#[instrument(skip(board), fields(side = board.side()))]
pub fn check_winner(board: &Board) -> Option<(Player, LineKind)> {
    board
        .lines()
        .iter()
        .find_map(|line| line_winner(line).map(|p| (p, line.kind())))
}
