//! Translates key presses into game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use teeko_core::Coord;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by `(dx, dy)`; `dy` grows upward.
    Move(Coord, Coord),
    /// Place, pick up, drop or put back a piece.
    Activate,
    NewGame,
    Quit,
}

pub const UP: Command = Command::Move(0, 1);
pub const DOWN: Command = Command::Move(0, -1);
pub const LEFT: Command = Command::Move(-1, 0);
pub const RIGHT: Command = Command::Move(1, 0);

/// Maps a key to its in-game command. Releases and unbound keys map to nothing.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up => Some(UP),
        KeyCode::Down => Some(DOWN),
        KeyCode::Left => Some(LEFT),
        KeyCode::Right => Some(RIGHT),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Activate),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(UP),
            's' => Some(DOWN),
            'a' => Some(LEFT),
            'd' => Some(RIGHT),
            'n' => Some(Command::NewGame),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Whether a key on a waiting screen (start, game over) asks to leave.
pub fn is_quit(key: KeyEvent) -> bool {
    command_for(key) == Some(Command::Quit)
}
