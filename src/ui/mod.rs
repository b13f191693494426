//! Terminal UI: the interactive game loop and board rendering. The UI only
//! consumes data the engine reports (status plus placement coordinates); it
//! never reaches into game-state transitions.

mod app;
mod game_view;

pub use app::App;
