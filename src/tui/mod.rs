//! Terminal UI for tic-tac-toe.

mod board;
mod controller;
mod input;
mod screen;
mod screens;

pub use controller::Controller;
pub use screen::{Screen, ScreenTransition};

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::{AppConfig, GameSession};

/// Runs the terminal game until the user quits.
///
/// Logs go to the configured log file so they do not corrupt the
/// alternate screen.
#[instrument(skip(config))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(
        bot_delay_ms = config.bot_delay_ms(),
        seed = ?config.seed(),
        mode = ?config.default_mode(),
        "Starting tictactoe TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(GameSession::from_config(&config));
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!(error = ?err, "Game loop error");
    }
    res
}
