use serde::{Deserialize, Serialize};

use crate::*;

/// Where the cursor sits when a game starts.
pub const CURSOR_START: Coord2 = (BOARD_SIZE / 2, BOARD_SIZE / 2);

/// A piece lifted during the movement phase, not yet dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Held {
    /// Cell the piece was lifted from. It keeps showing the piece until the drop.
    pub origin: Coord2,
    /// Slot of the piece in its owner's [`PlayerState`].
    pub piece_index: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cursor: Coord2,
    cursor_visible: bool,
    held: Option<Held>,
}

impl Selection {
    pub const fn new() -> Self {
        Self {
            cursor: CURSOR_START,
            cursor_visible: false,
            held: None,
        }
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn held(&self) -> Option<Held> {
        self.held
    }

    /// Toggles cursor visibility, returning the new value.
    pub fn flash(&mut self) -> bool {
        self.cursor_visible = !self.cursor_visible;
        self.cursor_visible
    }

    /// Moves the cursor by `(dx, dy)`, returning whether it moved at all.
    ///
    /// Free motion wraps around the board edges. While a piece is held each axis is
    /// clamped independently to the board and to one step from the piece's origin.
    pub fn move_cursor(&mut self, dx: Coord, dy: Coord) -> bool {
        let (x, y) = self.cursor;
        let next = match self.held {
            None => (wrap(x, dx), wrap(y, dy)),
            Some(Held { origin, .. }) => (
                clamp_near(x, dx, origin.0).unwrap_or(x),
                clamp_near(y, dy, origin.1).unwrap_or(y),
            ),
        };

        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    pub(crate) fn set_cursor(&mut self, coords: Coord2) {
        self.cursor = coords;
    }

    pub(crate) fn hold(&mut self, held: Held) {
        debug_assert!(self.held.is_none(), "only one piece can be held");
        self.held = Some(held);
    }

    pub(crate) fn release(&mut self) -> Option<Held> {
        self.held.take()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(value: Coord, delta: Coord) -> Coord {
    (i16::from(value) + i16::from(delta)).rem_euclid(i16::from(BOARD_SIZE)) as Coord
}

fn clamp_near(value: Coord, delta: Coord, origin: Coord) -> Option<Coord> {
    let next = i16::from(value) + i16::from(delta);
    let on_board = (0..i16::from(BOARD_SIZE)).contains(&next);
    let near_origin = (next - i16::from(origin)).abs() <= 1;
    (on_board && near_origin).then_some(next as Coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(origin: Coord2) -> Selection {
        let mut selection = Selection::new();
        selection.set_cursor(origin);
        selection.hold(Held {
            origin,
            piece_index: 0,
        });
        selection
    }

    #[test]
    fn starts_hidden_in_the_centre() {
        let selection = Selection::new();
        assert_eq!(selection.cursor(), (2, 2));
        assert!(!selection.is_cursor_visible());
        assert_eq!(selection.held(), None);
    }

    #[test]
    fn flash_toggles_visibility() {
        let mut selection = Selection::new();
        assert!(selection.flash());
        assert!(!selection.flash());
        assert!(selection.flash());
    }

    #[test]
    fn free_motion_wraps_on_both_axes() {
        let mut selection = Selection::new();
        selection.set_cursor((4, 0));

        assert!(selection.move_cursor(1, 0));
        assert_eq!(selection.cursor(), (0, 0));

        assert!(selection.move_cursor(0, -1));
        assert_eq!(selection.cursor(), (0, 4));

        assert!(selection.move_cursor(-1, 1));
        assert_eq!(selection.cursor(), (4, 0));
    }

    #[test]
    fn held_motion_stays_within_one_step_of_origin() {
        let mut selection = holding((2, 2));

        assert!(selection.move_cursor(1, 0));
        assert_eq!(selection.cursor(), (3, 2));
        assert!(!selection.move_cursor(1, 0));
        assert_eq!(selection.cursor(), (3, 2));

        assert!(selection.move_cursor(-1, 0));
        assert!(selection.move_cursor(-1, 0));
        assert_eq!(selection.cursor(), (1, 2));
        assert!(!selection.move_cursor(-1, 0));
    }

    #[test]
    fn held_motion_does_not_wrap_at_the_edge() {
        let mut selection = holding((4, 0));

        assert!(!selection.move_cursor(1, 0));
        assert!(!selection.move_cursor(0, -1));
        assert_eq!(selection.cursor(), (4, 0));

        assert!(selection.move_cursor(-1, 1));
        assert_eq!(selection.cursor(), (3, 1));
    }

    #[test]
    fn rejected_axis_does_not_block_the_other() {
        let mut selection = holding((0, 2));

        assert!(selection.move_cursor(-1, 1));
        assert_eq!(selection.cursor(), (0, 3));
    }

    #[test]
    fn release_returns_the_held_piece_once() {
        let mut selection = holding((1, 1));
        assert!(selection.release().is_some());
        assert_eq!(selection.release(), None);
        assert_eq!(selection.held(), None);
    }
}
