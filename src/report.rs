//! Headless reports for the `suggest` and `check` commands.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tictactoe_core::{Board, BotReason, Player, Position, check_winner, choose_move, is_draw};
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
struct Suggestion {
    bot: Player,
    position: Position,
    index: usize,
    reason: BotReason,
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
enum Verdict {
    Winner { winner: Player, line: [usize; 3] },
    Draw,
    InProgress { to_move: Player },
}

/// Parses `cells` and describes the bot's move as text or JSON.
///
/// # Errors
///
/// Fails when the board cannot be parsed or has no empty square.
#[instrument]
pub fn suggest(cells: &str, bot: Player, seed: Option<u64>, json: bool) -> Result<String> {
    let board = Board::from_cells(cells).context("Invalid board")?;
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let Some(choice) = choose_move(&board, bot, &mut rng) else {
        bail!("Board is full, no move to suggest");
    };
    info!(position = %choice.position, reason = %choice.reason, "Suggested move");

    if json {
        let suggestion = Suggestion {
            bot,
            position: choice.position,
            index: choice.position.to_index(),
            reason: choice.reason,
        };
        return serde_json::to_string(&suggestion).context("Failed to encode suggestion");
    }
    Ok(format!(
        "{} plays {} (square {}, {})",
        bot,
        choice.position,
        choice.position.to_index() + 1,
        choice.reason
    ))
}

/// Parses `cells` and reports the winner, a draw, or whose move it is.
///
/// # Errors
///
/// Fails when the board cannot be parsed.
#[instrument]
pub fn check(cells: &str, json: bool) -> Result<String> {
    let board = Board::from_cells(cells).context("Invalid board")?;
    let verdict = match check_winner(&board) {
        Some(win) => Verdict::Winner {
            winner: win.winner,
            line: win.line.map(Position::to_index),
        },
        None if is_draw(&board) => Verdict::Draw,
        None => Verdict::InProgress {
            to_move: next_player(&board),
        },
    };

    if json {
        return serde_json::to_string(&verdict).context("Failed to encode verdict");
    }
    Ok(match verdict {
        Verdict::Winner { winner, line } => format!(
            "Winner: {} on squares {}-{}-{}",
            winner,
            line[0] + 1,
            line[1] + 1,
            line[2] + 1
        ),
        Verdict::Draw => "Draw".to_string(),
        Verdict::InProgress { to_move } => format!("In progress, {} to move", to_move),
    })
}

/// X moves whenever both marks have been played equally often.
fn next_player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
