//! Tic-tac-toe - unified CLI
//!
//! Plays in the terminal, or answers one-shot questions about a board.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, check, run_tui, suggest};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            seed,
            bot_delay_ms,
        } => {
            let config = AppConfig::load(config.as_deref())
                .context("Failed to load configuration")?
                .with_overrides(mode, seed, bot_delay_ms);
            run_tui(config).await
        }
        Command::Suggest {
            board,
            bot,
            seed,
            json,
        } => {
            initialize_stderr_tracing();
            println!("{}", suggest(&board, bot.into(), seed, json)?);
            Ok(())
        }
        Command::Check { board, json } => {
            initialize_stderr_tracing();
            println!("{}", check(&board, json)?);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout carries only the report.
#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
