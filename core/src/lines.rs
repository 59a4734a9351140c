//! Every straight four-cell line on the board.

use crate::*;

/// Four linear cell indices forming one winning line.
pub type WinLine = [CellIndex; 4];

pub const WIN_LINE_COUNT: usize = 28;

#[rustfmt::skip]
pub static WIN_LINES: [WinLine; WIN_LINE_COUNT] = [
    // horizontal
    [0, 1, 2, 3],     [1, 2, 3, 4],
    [5, 6, 7, 8],     [6, 7, 8, 9],
    [10, 11, 12, 13], [11, 12, 13, 14],
    [15, 16, 17, 18], [16, 17, 18, 19],
    [20, 21, 22, 23], [21, 22, 23, 24],
    // vertical
    [0, 5, 10, 15],   [5, 10, 15, 20],
    [1, 6, 11, 16],   [6, 11, 16, 21],
    [2, 7, 12, 17],   [7, 12, 17, 22],
    [3, 8, 13, 18],   [8, 13, 18, 23],
    [4, 9, 14, 19],   [9, 14, 19, 24],
    // rising diagonal
    [0, 6, 12, 18],   [6, 12, 18, 24],
    [1, 7, 13, 19],   [5, 11, 17, 23],
    // falling diagonal
    [3, 7, 11, 15],   [4, 8, 12, 16],
    [8, 12, 16, 20],  [9, 13, 17, 21],
];

pub fn line_coords(line: &WinLine) -> [Coord2; 4] {
    line.map(from_cell_index)
}

/// How many cells of `line` hold one of `pieces`. Each line cell counts once.
pub fn occupancy(line: &WinLine, pieces: &PlayerState) -> u8 {
    line.iter()
        .filter(|&&index| pieces.occupies(from_cell_index(index)))
        .count() as u8
}

/// First line fully covered by `pieces`, if any.
pub fn completed_line(pieces: &PlayerState) -> Option<&'static WinLine> {
    WIN_LINES
        .iter()
        .find(|line| occupancy(line, pieces) == PIECES_PER_PLAYER)
}

/// Best partial line of `pieces`, `0..=4`.
pub fn longest_line(pieces: &PlayerState) -> u8 {
    WIN_LINES
        .iter()
        .map(|line| occupancy(line, pieces))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(coords: &[Coord2]) -> PlayerState {
        let mut state = PlayerState::new();
        for &pos in coords {
            state.push(pos);
        }
        state
    }

    #[test]
    fn lines_are_distinct_contiguous_and_in_range() {
        for (i, line) in WIN_LINES.iter().enumerate() {
            assert!(line.iter().all(|&index| usize::from(index) < CELL_COUNT));

            let coords = line_coords(line);
            let step = (coords[1].0 - coords[0].0, coords[1].1 - coords[0].1);
            assert!(step.0.abs() <= 1 && step.1.abs() <= 1 && step != (0, 0));
            for pair in coords.windows(2) {
                assert_eq!((pair[1].0 - pair[0].0, pair[1].1 - pair[0].1), step);
            }

            for other in &WIN_LINES[i + 1..] {
                let mut a = *line;
                let mut b = *other;
                a.sort_unstable();
                b.sort_unstable();
                assert_ne!(a, b, "duplicate line {line:?}");
            }
        }
    }

    #[test]
    fn line_directions_are_balanced() {
        let mut horizontal = 0;
        let mut vertical = 0;
        let mut diagonal = 0;
        for line in &WIN_LINES {
            let coords = line_coords(line);
            match (coords[1].0 - coords[0].0, coords[1].1 - coords[0].1) {
                (_, 0) => horizontal += 1,
                (0, _) => vertical += 1,
                _ => diagonal += 1,
            }
        }
        assert_eq!((horizontal, vertical, diagonal), (10, 10, 8));
    }

    #[test]
    fn full_row_completes_a_line() {
        let state = pieces(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(completed_line(&state), Some(&[0, 1, 2, 3]));
        assert_eq!(longest_line(&state), 4);
    }

    #[test]
    fn falling_diagonal_completes_a_line() {
        let state = pieces(&[(1, 4), (2, 3), (3, 2), (4, 1)]);
        assert!(completed_line(&state).is_some());
    }

    #[test]
    fn square_is_not_a_line() {
        let state = pieces(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(completed_line(&state), None);
        assert_eq!(longest_line(&state), 2);
    }

    #[test]
    fn broken_row_scores_three() {
        let state = pieces(&[(0, 2), (1, 2), (3, 2), (4, 4)]);
        assert_eq!(completed_line(&state), None);
        assert_eq!(longest_line(&state), 3);
    }

    #[test]
    fn no_pieces_scores_zero() {
        assert_eq!(longest_line(&PlayerState::new()), 0);
    }
}
