use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("A player cannot have more than four pieces")]
    TooManyPieces,
    #[error("Two pieces cannot share a cell")]
    OverlappingPieces,
    #[error("Piece counts do not match the player to move")]
    InvalidTurn,
    #[error("Cursor must stay next to the held piece")]
    OutOfReach,
}

pub type Result<T> = core::result::Result<T, GameError>;
