//! Core Connect Four game logic: board representation, player types, and the
//! turn-driving game engine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{GameEngine, GameStatus, MoveReport};
pub use player::Player;
