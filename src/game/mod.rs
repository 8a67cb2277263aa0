//! Core Connect Four engine: board, players, win patterns and the
//! [`GameEngine`] that owns a board and applies moves to it.

mod board;
mod engine;
mod pattern;
mod player;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use engine::{GameEngine, DEFAULT_WIN_STREAK};
pub use pattern::{Direction, WinPattern};
pub use player::Player;
