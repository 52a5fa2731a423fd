//! Hex-grid board.
//!
//! Offset coordinates: odd rows are shifted half a hex to the right, so
//! even and odd rows use different neighbor offsets.

use smallvec::SmallVec;

use crate::core::Hex;

use super::champion::Champion;

/// Neighbor offsets `(d_row, d_col)` for even rows.
const EVEN_ROW_NEIGHBORS: [(isize, isize); 6] = [(0, -1), (0, 1), (-1, -1), (-1, 0), (1, -1), (1, 0)];
/// Neighbor offsets `(d_row, d_col)` for odd rows.
const ODD_ROW_NEIGHBORS: [(isize, isize); 6] = [(0, -1), (0, 1), (-1, 0), (-1, 1), (1, 0), (1, 1)];

/// Fixed-size grid; each cell owns at most one unit.
///
/// Invariant: a unit in cell `h` has `position == Some(h)`.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Champion>>,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| None).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn in_bounds(&self, hex: Hex) -> bool {
        hex.row < self.rows && hex.col < self.cols
    }

    fn cell_index(&self, hex: Hex) -> Option<usize> {
        self.in_bounds(hex).then(|| hex.row * self.cols + hex.col)
    }

    #[must_use]
    pub fn get(&self, hex: Hex) -> Option<&Champion> {
        self.cell_index(hex).and_then(|i| self.cells[i].as_ref())
    }

    pub fn get_mut(&mut self, hex: Hex) -> Option<&mut Champion> {
        let i = self.cell_index(hex)?;
        self.cells[i].as_mut()
    }

    #[must_use]
    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.get(hex).is_some()
    }

    /// Put a unit in an empty in-bounds cell.
    ///
    /// Hands the unit back if the cell is taken or out of bounds.
    pub fn place(&mut self, hex: Hex, mut champion: Champion) -> Result<(), Champion> {
        match self.cell_index(hex) {
            Some(i) if self.cells[i].is_none() => {
                champion.position = Some(hex);
                self.cells[i] = Some(champion);
                Ok(())
            }
            _ => Err(champion),
        }
    }

    /// Take the unit out of a cell. Its position is cleared.
    pub fn remove(&mut self, hex: Hex) -> Option<Champion> {
        let i = self.cell_index(hex)?;
        let mut champion = self.cells[i].take()?;
        champion.position = None;
        Some(champion)
    }

    /// Move a unit into an empty cell. `false` leaves the board unchanged.
    pub fn move_unit(&mut self, from: Hex, to: Hex) -> bool {
        if from == to || !self.is_occupied(from) || !self.in_bounds(to) || self.is_occupied(to) {
            return false;
        }
        match self.remove(from) {
            Some(champion) => self.place(to, champion).is_ok(),
            None => false,
        }
    }

    /// Exchange the contents of two cells (either may be empty).
    pub fn swap(&mut self, a: Hex, b: Hex) -> bool {
        let (Some(ia), Some(ib)) = (self.cell_index(a), self.cell_index(b)) else {
            return false;
        };
        self.cells.swap(ia, ib);
        if let Some(champion) = self.cells[ia].as_mut() {
            champion.position = Some(a);
        }
        if let Some(champion) = self.cells[ib].as_mut() {
            champion.position = Some(b);
        }
        true
    }

    /// In-bounds neighbors of a cell.
    #[must_use]
    pub fn get_hex_neighbors(&self, hex: Hex) -> SmallVec<[Hex; 6]> {
        let offsets = if hex.row % 2 == 0 {
            &EVEN_ROW_NEIGHBORS
        } else {
            &ODD_ROW_NEIGHBORS
        };
        offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = hex.row.checked_add_signed(dr)?;
                let col = hex.col.checked_add_signed(dc)?;
                let neighbor = Hex::new(row, col);
                self.in_bounds(neighbor).then_some(neighbor)
            })
            .collect()
    }

    /// Whether any neighbor of `hex` is occupied.
    #[must_use]
    pub fn has_adjacent_unit(&self, hex: Hex) -> bool {
        self.get_hex_neighbors(hex)
            .iter()
            .any(|n| self.is_occupied(*n))
    }

    /// Units on the board, row-major.
    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.cells.iter().flatten()
    }

    pub fn champions_mut(&mut self) -> impl Iterator<Item = &mut Champion> {
        self.cells.iter_mut().flatten()
    }

    /// Occupied cells with their units, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Hex, &Champion)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|c| (Hex::new(i / cols, i % cols), c)))
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// First empty cell, row-major.
    #[must_use]
    pub fn first_empty(&self) -> Option<Hex> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|i| Hex::new(i / self.cols, i % self.cols))
    }

    /// Every unit's stored position matches its cell.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.occupied().all(|(hex, c)| c.position == Some(hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use std::sync::Arc;

    fn unit(name: &str) -> Champion {
        let catalog = sample_catalog();
        Champion::new(Arc::clone(catalog.champion_by_name(name).unwrap()), 1)
    }

    #[test]
    fn test_place_sets_position() {
        let mut board = Board::new(4, 7);
        board.place(Hex::new(1, 2), unit("Garen")).unwrap();
        assert_eq!(board.get(Hex::new(1, 2)).unwrap().position, Some(Hex::new(1, 2)));
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new(4, 7);
        board.place(Hex::new(0, 0), unit("Garen")).unwrap();
        let back = board.place(Hex::new(0, 0), unit("Vi")).unwrap_err();
        assert_eq!(back.name(), "Vi");
        assert!(board.place(Hex::new(4, 0), unit("Vi")).is_err());
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn test_remove_clears_position() {
        let mut board = Board::new(4, 7);
        board.place(Hex::new(2, 3), unit("Garen")).unwrap();
        let taken = board.remove(Hex::new(2, 3)).unwrap();
        assert_eq!(taken.position, None);
        assert!(board.remove(Hex::new(2, 3)).is_none());
    }

    #[test]
    fn test_move_unit_requires_empty_destination() {
        let mut board = Board::new(4, 7);
        board.place(Hex::new(0, 0), unit("Garen")).unwrap();
        board.place(Hex::new(0, 1), unit("Vi")).unwrap();
        assert!(!board.move_unit(Hex::new(0, 0), Hex::new(0, 1)));
        assert!(board.move_unit(Hex::new(0, 0), Hex::new(3, 6)));
        assert_eq!(board.get(Hex::new(3, 6)).unwrap().name(), "Garen");
        assert!(board.is_consistent());
    }

    #[test]
    fn test_swap_updates_both_positions() {
        let mut board = Board::new(4, 7);
        board.place(Hex::new(0, 0), unit("Garen")).unwrap();
        board.place(Hex::new(1, 1), unit("Vi")).unwrap();
        assert!(board.swap(Hex::new(0, 0), Hex::new(1, 1)));
        assert_eq!(board.get(Hex::new(0, 0)).unwrap().name(), "Vi");
        assert_eq!(board.get(Hex::new(1, 1)).unwrap().name(), "Garen");
        assert!(board.swap(Hex::new(1, 1), Hex::new(2, 2)));
        assert!(board.get(Hex::new(1, 1)).is_none());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_neighbors_even_row() {
        let board = Board::new(4, 7);
        let mut n: Vec<_> = board.get_hex_neighbors(Hex::new(2, 3)).into_vec();
        n.sort();
        let mut expected = vec![
            Hex::new(2, 2),
            Hex::new(2, 4),
            Hex::new(1, 2),
            Hex::new(1, 3),
            Hex::new(3, 2),
            Hex::new(3, 3),
        ];
        expected.sort();
        assert_eq!(n, expected);
    }

    #[test]
    fn test_neighbors_odd_row() {
        let board = Board::new(4, 7);
        let mut n: Vec<_> = board.get_hex_neighbors(Hex::new(1, 3)).into_vec();
        n.sort();
        let mut expected = vec![
            Hex::new(1, 2),
            Hex::new(1, 4),
            Hex::new(0, 3),
            Hex::new(0, 4),
            Hex::new(2, 3),
            Hex::new(2, 4),
        ];
        expected.sort();
        assert_eq!(n, expected);
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let board = Board::new(4, 7);
        let mut n: Vec<_> = board.get_hex_neighbors(Hex::new(0, 0)).into_vec();
        n.sort();
        assert_eq!(n, vec![Hex::new(0, 1), Hex::new(1, 0)]);

        let n = board.get_hex_neighbors(Hex::new(3, 6));
        assert!(n.iter().all(|h| board.in_bounds(*h)));
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn test_first_empty_row_major() {
        let mut board = Board::new(2, 2);
        assert_eq!(board.first_empty(), Some(Hex::new(0, 0)));
        board.place(Hex::new(0, 0), unit("Garen")).unwrap();
        assert_eq!(board.first_empty(), Some(Hex::new(0, 1)));
    }
}
