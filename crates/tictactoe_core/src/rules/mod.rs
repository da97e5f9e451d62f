//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); they never mutate state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};
