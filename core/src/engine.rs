use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players take turns dropping pieces onto empty cells.
    Placement,
    /// Every piece is on the board; players slide one piece per turn.
    Movement,
}

/// Which interaction `activate` performs next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Placing,
    Selecting,
    Holding,
    Won(Player),
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivateOutcome {
    NoChange,
    Placed,
    Picked,
    Cancelled,
    Moved,
    Won(Player),
}

impl ActivateOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Whether the action ended the turn.
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Placed | Self::Moved | Self::Won(_))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeekoEngine {
    board: Board,
    players: [PlayerState; 2],
    current_player: Player,
    selection: Selection,
    winner: Option<Player>,
}

impl TeekoEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [PlayerState::new(); 2],
            current_player: Player::Player1,
            selection: Selection::new(),
            winner: None,
        }
    }

    /// Sets up a position from explicit piece lists, in placement order.
    ///
    /// Player 1 always opens, so during placement the piece counts must agree with
    /// `to_move`. A line already completed by the player who moved last is reported
    /// as the winner; `to_move` holding a line is rejected as [`GameError::InvalidTurn`].
    pub fn from_positions(p1: &[Coord2], p2: &[Coord2], to_move: Player) -> Result<Self> {
        let mut engine = Self::new();

        for (player, pieces) in [(Player::Player1, p1), (Player::Player2, p2)] {
            if pieces.len() > usize::from(PIECES_PER_PLAYER) {
                log::warn!("{player} given {} pieces", pieces.len());
                return Err(GameError::TooManyPieces);
            }
            for &coords in pieces {
                if !in_bounds(coords) {
                    log::warn!("{player} piece at {coords:?} is off the board");
                    return Err(GameError::InvalidCoords);
                }
                if !engine.board.cell_at(coords).is_empty() {
                    log::warn!("{player} piece at {coords:?} overlaps another piece");
                    return Err(GameError::OverlappingPieces);
                }
                engine.board.place(coords, player);
                engine.players[player.slot()].push(coords);
            }
        }

        let in_placement = p1.len() + p2.len() < 2 * usize::from(PIECES_PER_PLAYER);
        let counts_match = match to_move {
            Player::Player1 => p1.len() == p2.len(),
            Player::Player2 => p1.len() == p2.len() + 1,
        };
        if in_placement && !counts_match {
            log::warn!(
                "{to_move} cannot be to move with {} and {} pieces placed",
                p1.len(),
                p2.len()
            );
            return Err(GameError::InvalidTurn);
        }

        if lines::completed_line(engine.player(to_move)).is_some() {
            log::warn!("{to_move} cannot be to move with a completed line");
            return Err(GameError::InvalidTurn);
        }

        engine.current_player = to_move;
        engine.winner = engine.check_win();
        Ok(engine)
    }

    /// Discards the current game and starts over.
    pub fn new_game(&mut self) {
        log::debug!("new game");
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board.cell_at(coords)
    }

    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.slot()]
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn cursor(&self) -> Coord2 {
        self.selection.cursor()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.selection.is_cursor_visible()
    }

    pub fn held(&self) -> Option<Held> {
        self.selection.held()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn phase(&self) -> GamePhase {
        if self.players.iter().all(PlayerState::has_all_pieces) {
            GamePhase::Movement
        } else {
            GamePhase::Placement
        }
    }

    pub fn state(&self) -> EngineState {
        match (self.winner, self.phase(), self.selection.held()) {
            (Some(winner), _, _) => EngineState::Won(winner),
            (None, GamePhase::Placement, _) => EngineState::Placing,
            (None, GamePhase::Movement, None) => EngineState::Selecting,
            (None, GamePhase::Movement, Some(_)) => EngineState::Holding,
        }
    }

    /// Best partial line of `player`, for the status display.
    pub fn longest_line(&self, player: Player) -> u8 {
        lines::longest_line(self.player(player))
    }

    /// Winner among the pieces of the player who committed the last action.
    pub fn check_win(&self) -> Option<Player> {
        let mover = self.current_player.other();
        lines::completed_line(self.player(mover)).map(|line| {
            log::trace!("{mover} completed line {line:?}");
            mover
        })
    }

    pub fn flash_cursor(&mut self) -> bool {
        self.selection.flash()
    }

    /// Moves the cursor, see [`Selection::move_cursor`]. Returns whether it moved.
    pub fn move_cursor(&mut self, dx: Coord, dy: Coord) -> bool {
        if self.is_finished() {
            return false;
        }
        self.selection.move_cursor(dx, dy)
    }

    /// Jumps the cursor to `coords`. While a piece is held the target must be next to
    /// its origin.
    pub fn set_cursor(&mut self, coords: Coord2) -> Result<()> {
        if !in_bounds(coords) {
            return Err(GameError::InvalidCoords);
        }
        if let Some(held) = self.selection.held() {
            if chebyshev_distance(held.origin, coords) > 1 {
                return Err(GameError::OutOfReach);
            }
        }
        self.selection.set_cursor(coords);
        Ok(())
    }

    /// Performs the action under the cursor: place, pick up, cancel or drop.
    ///
    /// Illegal actions leave the game untouched and report
    /// [`ActivateOutcome::NoChange`].
    pub fn activate(&mut self) -> ActivateOutcome {
        match self.state() {
            EngineState::Placing => self.place_at_cursor(),
            EngineState::Selecting => self.pick_at_cursor(),
            EngineState::Holding => self.drop_at_cursor(),
            EngineState::Won(_) => ActivateOutcome::NoChange,
        }
    }

    fn place_at_cursor(&mut self) -> ActivateOutcome {
        let cursor = self.selection.cursor();
        if !self.board.cell_at(cursor).is_empty() {
            log::trace!("placement at {cursor:?} rejected, cell taken");
            return ActivateOutcome::NoChange;
        }

        let player = self.current_player;
        self.board.place(cursor, player);
        self.players[player.slot()].push(cursor);
        log::debug!("{player} placed at {cursor:?}");

        self.commit(ActivateOutcome::Placed)
    }

    fn pick_at_cursor(&mut self) -> ActivateOutcome {
        let cursor = self.selection.cursor();
        let player = self.current_player;
        if self.board.cell_at(cursor).owner() != Some(player) {
            log::trace!("pick at {cursor:?} rejected, not a {player} piece");
            return ActivateOutcome::NoChange;
        }

        let Some(piece_index) = self.player(player).index_of(cursor) else {
            unreachable!("board and {player} positions disagree at {cursor:?}");
        };
        self.selection.hold(Held {
            origin: cursor,
            piece_index: piece_index as u8,
        });
        let targets = self.board.highlight_empty_neighbors(cursor);
        log::debug!("{player} picked up piece {piece_index} at {cursor:?}, {targets} targets");

        ActivateOutcome::Picked
    }

    fn drop_at_cursor(&mut self) -> ActivateOutcome {
        let cursor = self.selection.cursor();
        let Some(held) = self.selection.held() else {
            return ActivateOutcome::NoChange;
        };

        if cursor == held.origin {
            self.selection.release();
            self.board.clear_highlights();
            log::debug!("{} put piece back at {cursor:?}", self.current_player);
            return ActivateOutcome::Cancelled;
        }

        if !self.board.cell_at(cursor).is_highlighted() {
            log::trace!("drop at {cursor:?} rejected, not a legal target");
            return ActivateOutcome::NoChange;
        }

        let player = self.current_player;
        self.selection.release();
        self.board.clear_highlights();
        self.board.clear(held.origin);
        self.board.place(cursor, player);
        self.players[player.slot()].relocate(usize::from(held.piece_index), cursor);
        log::debug!("{player} moved {:?} -> {cursor:?}", held.origin);

        self.commit(ActivateOutcome::Moved)
    }

    fn commit(&mut self, outcome: ActivateOutcome) -> ActivateOutcome {
        self.current_player = self.current_player.other();

        match self.check_win() {
            Some(winner) => {
                log::info!("{winner} wins");
                self.winner = Some(winner);
                ActivateOutcome::Won(winner)
            }
            None => outcome,
        }
    }
}

impl Default for TeekoEngine {
    fn default() -> Self {
        Self::new()
    }
}
