//! # Connect Four
//!
//! Classic two-player Connect Four on a 7×6 grid with a terminal UI built
//! with Ratatui. Pieces drop from the top of a column and land on the lowest
//! empty cell; the first player to line up four horizontally, vertically, or
//! diagonally wins, and a full board with no winner is a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, game engine
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
