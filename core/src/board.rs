use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 5×5 grid. Reads outside the grid see [`Cell::Empty`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE as usize, BOARD_SIZE as usize)),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        if in_bounds(coords) {
            self.cells[coords.to_nd_index()]
        } else {
            Cell::Empty
        }
    }

    /// Puts `player`'s piece on an empty cell. Callers check emptiness first.
    pub fn place(&mut self, coords: Coord2, player: Player) {
        debug_assert!(
            in_bounds(coords) && self.cell_at(coords).is_empty(),
            "place requires an empty cell on the board, got {:?} at {coords:?}",
            self.cell_at(coords)
        );
        self.cells[coords.to_nd_index()] = player.cell();
    }

    pub fn clear(&mut self, coords: Coord2) {
        if in_bounds(coords) {
            self.cells[coords.to_nd_index()] = Cell::Empty;
        }
    }

    /// Marks every empty cell around `center` as a drop target, returning how many.
    pub fn highlight_empty_neighbors(&mut self, center: Coord2) -> u8 {
        let mut highlighted = 0;
        for pos in self.cells.iter_neighbors(center) {
            let cell = &mut self.cells[pos.to_nd_index()];
            if cell.is_empty() {
                *cell = Cell::Highlighted;
                highlighted += 1;
            }
        }
        highlighted
    }

    pub fn clear_highlights(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.is_highlighted())
            .for_each(|cell| *cell = Cell::Empty);
    }

    pub fn has_highlights(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_highlighted())
    }

    /// All cells with their coordinates, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn iter_highlighted(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_highlighted())
            .map(|(pos, _)| pos)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&other| other == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
