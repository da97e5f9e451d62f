//! Tic-tac-toe in the terminal.
//!
//! Play against a friend on the same keyboard, or against a bot that wins
//! when it can, blocks when it must, and otherwise prefers the center, then
//! the corners.
//!
//! # Architecture
//!
//! - **Rules**: board, win detection and bot policy live in `tictactoe_core`
//! - **Session**: [`GameSession`] owns the board, the mode and the bot's pending reply
//! - **TUI**: ratatui screens driven by a controller event loop
//! - **Reports**: headless `suggest` and `check` commands
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictactoe::{GameMode, GameSession};
//! use tictactoe_core::Position;
//!
//! let mut session = GameSession::new(Duration::from_millis(500), ChaCha8Rng::seed_from_u64(7));
//! session.choose_mode(GameMode::Bot);
//!
//! let now = Instant::now();
//! session.click_at(Position::TopLeft, now).unwrap();
//! let reply = session.play_bot(now + Duration::from_millis(500)).unwrap();
//! assert_eq!(reply.position, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod mode;
mod report;
mod session;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, Mark};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game mode and session
pub use mode::GameMode;
pub use session::{BOT, GameSession, HUMAN};

// Crate-level exports - Headless reports
pub use report::{check, suggest};

// Crate-level exports - Terminal UI
pub use tui::{Controller, Screen, ScreenTransition, run_tui};
