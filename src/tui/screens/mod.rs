//! Screen implementations for the TUI state machine.

mod in_game;
mod mode_select;

pub use in_game::InGameScreen;
pub use mode_select::ModeSelectScreen;
