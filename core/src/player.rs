use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Pieces each player owns over the whole game.
pub const PIECES_PER_PLAYER: u8 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    pub const fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    pub const fn cell(self) -> Cell {
        match self {
            Self::Player1 => Cell::Player1,
            Self::Player2 => Cell::Player2,
        }
    }

    /// One-based number used in status lines.
    pub const fn number(self) -> u8 {
        match self {
            Self::Player1 => 1,
            Self::Player2 => 2,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Pieces one player has on the board, in placement order.
///
/// Slot `i` is assigned when the `i`-th piece is placed and is overwritten in place
/// whenever that piece moves, so slots `0..piece_count` are always `Some`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    piece_count: u8,
    positions: [Option<Coord2>; PIECES_PER_PLAYER as usize],
}

impl PlayerState {
    pub const fn new() -> Self {
        Self {
            piece_count: 0,
            positions: [None; PIECES_PER_PLAYER as usize],
        }
    }

    pub fn piece_count(&self) -> u8 {
        self.piece_count
    }

    pub fn has_all_pieces(&self) -> bool {
        self.piece_count == PIECES_PER_PLAYER
    }

    pub fn position(&self, index: usize) -> Option<Coord2> {
        self.positions.get(index).copied().flatten()
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.positions.iter().flatten().copied()
    }

    pub fn occupies(&self, coords: Coord2) -> bool {
        self.positions().any(|pos| pos == coords)
    }

    /// Slot of the piece at `coords`, first match in placement order.
    pub fn index_of(&self, coords: Coord2) -> Option<usize> {
        self.positions
            .iter()
            .position(|&slot| slot == Some(coords))
    }

    pub(crate) fn push(&mut self, coords: Coord2) {
        assert!(
            !self.has_all_pieces(),
            "a player never places more than {PIECES_PER_PLAYER} pieces"
        );
        self.positions[usize::from(self.piece_count)] = Some(coords);
        self.piece_count += 1;
    }

    pub(crate) fn relocate(&mut self, index: usize, coords: Coord2) {
        assert!(
            self.position(index).is_some(),
            "only placed pieces can be moved"
        );
        self.positions[index] = Some(coords);
    }
}
