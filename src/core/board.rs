//! Immutable 3x3 board snapshots.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! A snapshot is never modified in place. Placing a marker produces a new
//! snapshot, which is what lets the move history share old boards freely.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::config::Markers;
use super::player::{Cell, Player};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Number of cells per row (and per column).
pub const BOARD_SIDE: usize = 3;

/// Indices of cells, sized to hold a whole board without allocating.
pub type CellIndices = SmallVec<[usize; BOARD_CELLS]>;

/// The board at one point in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: [Cell; BOARD_CELLS],
}

impl BoardSnapshot {
    /// Create an all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Create a board from raw cells.
    ///
    /// No reachability check is made: any combination of markers is accepted.
    #[must_use]
    pub const fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Get all cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Get a cell, or `None` if the index is off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if a cell is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_empty)
    }

    /// Return a copy of this board with `player`'s marker at `index`.
    ///
    /// The caller is responsible for checking that `index` is on the board
    /// and empty; the turn engine does so before calling.
    #[must_use]
    pub(crate) fn with_marker(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells;
        cells[index] = player.cell();
        Self { cells }
    }

    /// Indices of empty cells in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> CellIndices {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding a marker.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if every cell holds a marker.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Find the single cell that differs from `previous`.
    ///
    /// Returns `None` if the boards are identical or differ in more than
    /// one cell.
    #[must_use]
    pub fn changed_cell(&self, previous: &BoardSnapshot) -> Option<usize> {
        let mut changed = self
            .cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(i, _)| i);

        let first = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Render the board as three lines of glyphs.
    ///
    /// ```
    /// use tic_tac_toe::core::{BoardSnapshot, Markers};
    ///
    /// let board = BoardSnapshot::empty();
    /// assert_eq!(board.render(&Markers::ascii()), ". . .\n. . .\n. . .");
    /// ```
    #[must_use]
    pub fn render(&self, markers: &Markers) -> String {
        self.cells
            .chunks(BOARD_SIDE)
            .map(|row| {
                row.iter()
                    .map(|&cell| markers.glyph(cell))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Convert a cell index to its (row, column), both 0-based.
#[must_use]
pub const fn location(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}

impl Index<usize> for BoardSnapshot {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Markers::ascii()))
    }
}
