use serde::{Deserialize, Serialize};

use crate::Player;

/// Content of one board cell as seen by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
    /// Legal drop target of the held piece. Never outlives the hold.
    Highlighted,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Player1 => Some(Player::Player1),
            Self::Player2 => Some(Player::Player2),
            Self::Empty | Self::Highlighted => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}
