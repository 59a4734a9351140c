//! Rules engine for Teeko on a 5×5 board, driven by a cursor and a single
//! activate action so it can be played with directional buttons or arrow keys.
//!
//! [`TeekoEngine`] owns the whole game. Illegal input never errors during play, it
//! simply leaves the state untouched.

#![no_std]

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use player::*;
pub use selection::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
pub mod lines;
mod player;
mod selection;
mod types;
