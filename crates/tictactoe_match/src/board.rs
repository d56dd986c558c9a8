//! Square occupancy board.

use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the classic game.
pub const CLASSIC_SIDE: usize = 3;

/// Largest side length a match accepts.
pub const MAX_SIDE: usize = 64;

/// A position on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupancy {
    /// Nobody has played here.
    Empty,
    /// Claimed by a player for the rest of the match.
    OccupiedBy(Player),
}

impl Occupancy {
    /// Returns the occupant, if any.
    pub fn occupant(&self) -> Option<&Player> {
        match self {
            Occupancy::Empty => None,
            Occupancy::OccupiedBy(player) => Some(player),
        }
    }
}

/// One addressable board position and its occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    occupancy: Occupancy,
}

impl Cell {
    fn empty(coord: Coord) -> Self {
        Self {
            coord,
            occupancy: Occupancy::Empty,
        }
    }

    /// Returns the cell's position.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns the cell's occupancy.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Returns true if nobody occupies the cell.
    pub fn is_empty(&self) -> bool {
        matches!(self.occupancy, Occupancy::Empty)
    }
}

/// Which line of the board a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// A row, by index.
    #[display("row {_0}")]
    Row(usize),
    /// A column, by index.
    #[display("column {_0}")]
    Column(usize),
    /// `(0,0)` to `(N-1,N-1)`.
    #[display("main diagonal")]
    MainDiagonal,
    /// `(0,N-1)` to `(N-1,0)`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A row, column or diagonal of N cells.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    kind: LineKind,
    cells: Vec<&'a Cell>,
}

impl<'a> Line<'a> {
    /// Returns which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cells in scan order.
    pub fn cells(&self) -> &[&'a Cell] {
        &self.cells
    }
}

/// Errors from mutating the board directly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Coordinates fall outside the board.
    #[display("({row}, {col}) is outside a {side}x{side} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        side: usize,
    },
    /// The cell already has an occupant.
    #[display("({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Fixed-size N x N grid, one cell per `(row, col)`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(side: usize) -> Self {
        let cells = (0..side)
            .flat_map(|row| (0..side).map(move |col| Cell::empty(Coord::new(row, col))))
            .collect();
        Self { side, cells }
    }

    /// Returns the side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.side + col)
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Returns the occupancy at `(row, col)`, or `None` when out of range.
    pub fn occupancy(&self, row: usize, col: usize) -> Option<&Occupancy> {
        self.cell(row, col).map(Cell::occupancy)
    }

    /// Returns true if `(row, col)` is on the board and unoccupied.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; an empty board has no rows anyway
        self.cells.chunks(self.side.max(1))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.is_empty())
            .map(Cell::coord)
            .collect()
    }

    /// Every line in scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn lines(&self) -> Vec<Line<'_>> {
        let n = self.side;
        let mut lines = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push(Line {
                kind: LineKind::Row(row),
                cells: (0..n).map(|col| &self.cells[row * n + col]).collect(),
            });
        }

        for col in 0..n {
            lines.push(Line {
                kind: LineKind::Column(col),
                cells: (0..n).map(|row| &self.cells[row * n + col]).collect(),
            });
        }

        lines.push(Line {
            kind: LineKind::MainDiagonal,
            cells: (0..n).map(|i| &self.cells[i * n + i]).collect(),
        });

        lines.push(Line {
            kind: LineKind::AntiDiagonal,
            cells: (0..n).map(|i| &self.cells[i * n + (n - 1 - i)]).collect(),
        });

        lines
    }

    /// Places `player` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for coordinates off the board and
    /// [`BoardError::Occupied`] if the cell already has an occupant.
    #[instrument(skip(self, player), fields(player = %player))]
    pub(crate) fn occupy(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<(), BoardError> {
        let side = self.side;
        let idx = self
            .index(row, col)
            .ok_or(BoardError::OutOfRange { row, col, side })?;

        let cell = &mut self.cells[idx];
        if !cell.is_empty() {
            return Err(BoardError::Occupied { row, col });
        }
        cell.occupancy = Occupancy::OccupiedBy(player);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(CLASSIC_SIDE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.side].join("+");
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell.occupancy() {
                    Occupancy::Empty => ".".to_string(),
                    Occupancy::OccupiedBy(p) => p.role().mark().to_string(),
                })
                .collect();
            write!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}
