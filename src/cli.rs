//! Command-line interface for tictactoe.

use crate::GameMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Player;

/// Tic-tac-toe in the terminal, against a friend or a heuristic bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or a heuristic bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Start in this mode instead of showing the mode menu
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the bot's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds the bot waits before replying
        #[arg(long)]
        bot_delay_ms: Option<u64>,
    },

    /// Print the bot's move for a board
    Suggest {
        /// Nine cells in row-major order, e.g. "XX./.O./..." (`.` `-` `_` are empty)
        board: String,

        /// Mark the bot plays
        #[arg(long, value_enum, default_value_t = Mark::O)]
        bot: Mark,

        /// Seed for the random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report the winner and winning line of a board
    Check {
        /// Nine cells in row-major order
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// A mark as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "play",
            "--mode",
            "bot",
            "--seed",
            "4",
            "--bot-delay-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                seed,
                bot_delay_ms,
                config,
            } => {
                assert_eq!(mode, Some(GameMode::Bot));
                assert_eq!(seed, Some(4));
                assert_eq!(bot_delay_ms, Some(0));
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_suggest_defaults_to_o() {
        let cli = Cli::try_parse_from(["tictactoe", "suggest", "XX./.O./..."]).unwrap();
        match cli.command {
            Command::Suggest { bot, json, .. } => {
                assert_eq!(bot, Mark::O);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "--mode", "online"]).is_err());
    }
}
