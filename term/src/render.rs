//! Paints game state onto the terminal. Never mutates the game.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use teeko_core::{BOARD_SIZE, Cell, Coord2, EngineState, Player, TeekoEngine};

const BOARD_X: u16 = 20;
const BOARD_Y: u16 = 4;
const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const BOARD_BOTTOM: u16 = BOARD_Y + CELL_HEIGHT * BOARD_SIZE as u16;

/// What one square looks like in the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Square {
    Empty,
    Piece(Player),
    /// Origin of the piece being moved.
    HeldOrigin(Player),
    Highlighted,
    Cursor,
    /// Cursor in its dark blink phase while a piece is held.
    Picker,
}

pub fn square_at(engine: &TeekoEngine, coords: Coord2) -> Square {
    let held = engine.held();

    if engine.cursor() == coords && !engine.is_finished() {
        if engine.is_cursor_visible() {
            return Square::Cursor;
        }
        if held.is_some() {
            return Square::Picker;
        }
    }

    let owner = match engine.cell_at(coords) {
        Cell::Empty => return Square::Empty,
        Cell::Highlighted => return Square::Highlighted,
        Cell::Player1 => Player::Player1,
        Cell::Player2 => Player::Player2,
    };
    if held.map(|held| held.origin) == Some(coords) {
        Square::HeldOrigin(owner)
    } else {
        Square::Piece(owner)
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Green,
        Player::Player2 => Color::Red,
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::Player1 => "1 (green)",
        Player::Player2 => "2 (red)",
    }
}

fn square_style(square: Square) -> (Color, &'static str) {
    match square {
        Square::Empty => (Color::DarkGrey, "    "),
        Square::Piece(player) => (player_color(player), "    "),
        Square::HeldOrigin(player) => (player_color(player), " <> "),
        Square::Highlighted => (Color::DarkYellow, "    "),
        Square::Cursor => (Color::Blue, "    "),
        Square::Picker => (Color::Magenta, "    "),
    }
}

/// Screen column and row of a board square; row `y = 4` is drawn on top.
fn screen_origin((x, y): Coord2) -> (u16, u16) {
    let column = BOARD_X + CELL_WIDTH * x as u16;
    let row = BOARD_Y + CELL_HEIGHT * (BOARD_SIZE - 1 - y) as u16;
    (column, row)
}

fn draw_board(out: &mut impl Write, engine: &TeekoEngine) -> io::Result<()> {
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let (background, text) = square_style(square_at(engine, (x, y)));
            let (column, row) = screen_origin((x, y));
            queue!(
                out,
                MoveTo(column, row),
                SetBackgroundColor(background),
                SetForegroundColor(Color::White),
                Print(text),
            )?;
        }
    }
    queue!(out, ResetColor)
}

fn draw_status(out: &mut impl Write, engine: &TeekoEngine) -> io::Result<()> {
    let player = engine.current_player();
    let turn = match engine.state() {
        EngineState::Placing => "place a piece",
        EngineState::Selecting => "pick a piece to move",
        EngineState::Holding => "drop on a highlighted square",
        EngineState::Won(_) => "",
    };

    match engine.winner() {
        Some(winner) => queue!(
            out,
            MoveTo(BOARD_X, BOARD_Y - 2),
            SetForegroundColor(player_color(winner)),
            SetAttribute(Attribute::Bold),
            Print(format!("Player {} wins!", player_label(winner))),
            SetAttribute(Attribute::Reset),
        )?,
        None => queue!(
            out,
            MoveTo(BOARD_X, BOARD_Y - 2),
            SetForegroundColor(player_color(player)),
            Print(format!("Current player: {}, {turn}", player_label(player))),
        )?,
    }

    let right_column = BOARD_X + CELL_WIDTH * BOARD_SIZE as u16 + 3;
    for (player, column) in [
        (Player::Player1, BOARD_X.saturating_sub(16)),
        (Player::Player2, right_column),
    ] {
        queue!(
            out,
            MoveTo(column, BOARD_Y + CELL_HEIGHT * 2),
            SetForegroundColor(player_color(player)),
            Print(format!(
                "Player {} : {}",
                player.number(),
                engine.longest_line(player)
            )),
        )?;
    }

    queue!(
        out,
        ResetColor,
        MoveTo(BOARD_X, BOARD_BOTTOM + 1),
        Print("arrows/WASD move  space place/pick/drop  n new game  q quit"),
    )
}

/// Repaints the whole game screen.
pub fn draw_game(out: &mut impl Write, engine: &TeekoEngine) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_board(out, engine)?;
    draw_status(out, engine)?;
    out.flush()
}

pub fn draw_start_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(10, 10),
        SetAttribute(Attribute::Bold),
        Print("Teeko"),
        SetAttribute(Attribute::Reset),
        MoveTo(10, 12),
        Print("Get four in a row, column or diagonal."),
        MoveTo(10, 14),
        Print("Press any key to start, q to quit"),
    )?;
    out.flush()
}

pub fn draw_game_over(out: &mut impl Write) -> io::Result<()> {
    let row = BOARD_BOTTOM + 3;
    queue!(
        out,
        MoveTo(BOARD_X, row),
        SetAttribute(Attribute::Bold),
        Print("GAME OVER"),
        SetAttribute(Attribute::Reset),
        MoveTo(BOARD_X, row + 1),
        Print("Press a key to start again, q to quit"),
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement_engine() -> TeekoEngine {
        TeekoEngine::from_positions(
            &[(0, 0), (2, 2), (0, 1), (4, 1)],
            &[(2, 0), (2, 1), (0, 3), (4, 3)],
            Player::Player1,
        )
        .unwrap()
    }

    #[test]
    fn hidden_cursor_shows_the_cell_below() {
        let engine = TeekoEngine::new();
        assert_eq!(square_at(&engine, (2, 2)), Square::Empty);
    }

    #[test]
    fn visible_cursor_covers_the_cell() {
        let mut engine = TeekoEngine::new();
        engine.flash_cursor();
        assert_eq!(square_at(&engine, (2, 2)), Square::Cursor);
        assert_eq!(square_at(&engine, (1, 2)), Square::Empty);
    }

    #[test]
    fn held_piece_marks_origin_and_targets() {
        let mut engine = movement_engine();
        engine.set_cursor((2, 2)).unwrap();
        engine.activate();

        assert_eq!(square_at(&engine, (2, 2)), Square::Picker);
        assert_eq!(square_at(&engine, (3, 3)), Square::Highlighted);
        assert_eq!(square_at(&engine, (2, 1)), Square::Piece(Player::Player2));

        engine.move_cursor(1, 0);
        assert_eq!(square_at(&engine, (2, 2)), Square::HeldOrigin(Player::Player1));
    }

    #[test]
    fn top_row_is_drawn_first() {
        let (_, top) = screen_origin((0, 4));
        let (_, bottom) = screen_origin((0, 0));
        assert!(top < bottom);
        assert!(bottom < BOARD_BOTTOM);
    }

    #[test]
    fn game_frame_renders_into_a_buffer() {
        let mut buffer = Vec::new();
        draw_game(&mut buffer, &movement_engine()).unwrap();
        let text = String::from_utf8_lossy(&buffer);
        assert!(text.contains("Current player: 1 (green)"));
        assert!(text.contains("Player 2 : "));
    }
}
