//! Pure tic-tac-toe logic.
//!
//! Everything here is free of I/O: the board and its positions, the
//! eight winning lines, the [`Game`] engine that applies moves, and the
//! heuristic [`choose_move`] bot policy.
//!
//! ```
//! use tictactoe_core::{Game, Player, Position, check_winner};
//!
//! let mut game = Game::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::BottomLeft, Position::TopRight] {
//!     game.place(pos).unwrap();
//! }
//! let win = check_winner(game.board()).unwrap();
//! assert_eq!(win.winner, Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use bot::{BotChoice, BotReason, choose_move, completing_square};
pub use game::Game;
pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, is_draw, is_full};
pub use types::{Board, BoardParseError, Outcome, Player, Square};
