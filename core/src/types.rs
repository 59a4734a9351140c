use ndarray::Array2;

/// Single coordinate axis. Signed so neighbour probes may step off the board.
pub type Coord = i8;

/// Two-dimensional coordinates `(x, y)`, `y` growing upward.
pub type Coord2 = (Coord, Coord);

/// Linear cell index `y * BOARD_SIZE + x`, as used by the win-line table.
pub type CellIndex = u8;

/// Width and height of the board.
pub const BOARD_SIZE: Coord = 5;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for in-bounds coordinates, see [`in_bounds`].
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn in_bounds((x, y): Coord2) -> bool {
    x >= 0 && x < BOARD_SIZE && y >= 0 && y < BOARD_SIZE
}

pub const fn to_cell_index((x, y): Coord2) -> CellIndex {
    (y * BOARD_SIZE + x) as CellIndex
}

pub const fn from_cell_index(index: CellIndex) -> Coord2 {
    let index = index as Coord;
    (index % BOARD_SIZE, index / BOARD_SIZE)
}

/// Chebyshev (king-move) distance between two coordinates.
pub const fn chebyshev_distance(a: Coord2, b: Coord2) -> u8 {
    let dx = (a.0 as i16 - b.0 as i16).unsigned_abs();
    let dy = (a.1 as i16 - b.1 as i16).unsigned_abs();
    (if dx > dy { dx } else { dy }) as u8
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0 as Coord, dim.1 as Coord);
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add(dx)?;
    if !(0..max_x).contains(&next_x) {
        return None;
    }

    let next_y = y.checked_add(dy)?;
    if !(0..max_y).contains(&next_y) {
        return None;
    }

    Some((next_x, next_y))
}

/// The up to eight in-bounds cells around a centre cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Array2<u8> {
        Array2::default((BOARD_SIZE as usize, BOARD_SIZE as usize))
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(grid().iter_neighbors((0, 0)).count(), 3);
        assert_eq!(grid().iter_neighbors((4, 4)).count(), 3);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(grid().iter_neighbors((2, 0)).count(), 5);
    }

    #[test]
    fn centre_has_eight_neighbors_none_of_them_itself() {
        let grid = grid();
        assert_eq!(grid.iter_neighbors((2, 2)).count(), 8);
        assert!(grid.iter_neighbors((2, 2)).all(|pos| pos != (2, 2)));
        assert!(
            grid.iter_neighbors((2, 2))
                .all(|pos| chebyshev_distance(pos, (2, 2)) == 1)
        );
    }

    #[test]
    fn cell_index_is_row_major_from_bottom_left() {
        assert_eq!(to_cell_index((0, 0)), 0);
        assert_eq!(to_cell_index((3, 0)), 3);
        assert_eq!(to_cell_index((0, 1)), 5);
        assert_eq!(to_cell_index((4, 4)), 24);
        for index in 0..CELL_COUNT as CellIndex {
            assert_eq!(to_cell_index(from_cell_index(index)), index);
        }
    }

    #[test]
    fn bounds_reject_negative_and_overflowing_axes() {
        assert!(in_bounds((0, 4)));
        assert!(!in_bounds((-1, 2)));
        assert!(!in_bounds((2, 5)));
        assert!(!in_bounds((Coord::MIN, Coord::MAX)));
    }
}
