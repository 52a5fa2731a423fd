//! Board coordinates and the flat position index used by agents.
//!
//! Agents address every unit slot with one integer: indices
//! `0..board_cells` are board hexes in row-major order, the next
//! `bench_size` indices are bench slots. [`Layout`] converts between the
//! flat index and a typed [`Location`].

use serde::{Deserialize, Serialize};

/// Offset-coordinate hex cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub row: usize,
    pub col: usize,
}

impl Hex {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where a unit lives: a board hex or a bench slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Board(Hex),
    Bench(usize),
}

impl Location {
    #[must_use]
    pub fn is_board(self) -> bool {
        matches!(self, Location::Board(_))
    }
}

/// Board and bench dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub bench_size: usize,
}

impl Layout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize, bench_size: usize) -> Self {
        Self { rows, cols, bench_size }
    }

    /// Number of board hexes.
    #[must_use]
    pub const fn board_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Board hexes plus bench slots.
    #[must_use]
    pub const fn total_positions(&self) -> usize {
        self.board_cells() + self.bench_size
    }

    /// Decode a flat index. `None` if out of range.
    #[must_use]
    pub fn location(&self, index: usize) -> Option<Location> {
        let cells = self.board_cells();
        if index < cells {
            Some(Location::Board(Hex::new(index / self.cols, index % self.cols)))
        } else if index < self.total_positions() {
            Some(Location::Bench(index - cells))
        } else {
            None
        }
    }

    /// Encode a location. `None` if it lies outside this layout.
    #[must_use]
    pub fn index_of(&self, location: Location) -> Option<usize> {
        match location {
            Location::Board(hex) if hex.row < self.rows && hex.col < self.cols => {
                Some(hex.row * self.cols + hex.col)
            }
            Location::Bench(slot) if slot < self.bench_size => Some(self.board_cells() + slot),
            _ => None,
        }
    }
}
