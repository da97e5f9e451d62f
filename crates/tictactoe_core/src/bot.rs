//! Heuristic bot policy.
//!
//! The bot works down a fixed priority list and takes the first rule that
//! yields a square:
//!
//! 1. complete one of its own lines,
//! 2. block a line the opponent is about to complete,
//! 3. take the center,
//! 4. take the first free corner in [`Position::CORNERS`] order,
//! 5. pick uniformly among whatever is left.
//!
//! Only the last rule consumes randomness, and it draws from the caller's
//! RNG so tests can seed it.

use crate::rules::LINES;
use crate::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule produced the bot's move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum BotReason {
    /// Completes a line of the bot's own marks.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Takes a corner square.
    #[display("corner")]
    Corner,
    /// Random pick among the remaining squares.
    #[display("random")]
    Random,
}

/// The bot's chosen square and why it chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotChoice {
    /// Square to play.
    pub position: Position,
    /// Rule that selected it.
    pub reason: BotReason,
}

/// Returns the empty square that would complete a line for `player`.
///
/// Lines are scanned in [`LINES`] order; the first line holding two of
/// `player`'s marks and one empty square wins.
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mine = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        let empty = line.iter().copied().find(|pos| board.is_empty(*pos));
        match (mine, empty) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

/// Picks the bot's move for `board`, playing as `bot`.
///
/// Returns `None` only when the board has no empty square. The chosen
/// square is always empty.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, bot: Player, rng: &mut R) -> Option<BotChoice> {
    let choice = if let Some(position) = completing_square(board, bot) {
        BotChoice {
            position,
            reason: BotReason::Win,
        }
    } else if let Some(position) = completing_square(board, bot.opponent()) {
        BotChoice {
            position,
            reason: BotReason::Block,
        }
    } else if board.is_empty(Position::Center) {
        BotChoice {
            position: Position::Center,
            reason: BotReason::Center,
        }
    } else if let Some(position) = Position::CORNERS
        .iter()
        .copied()
        .find(|pos| board.is_empty(*pos))
    {
        BotChoice {
            position,
            reason: BotReason::Corner,
        }
    } else {
        let position = *board.empty_positions().choose(rng)?;
        BotChoice {
            position,
            reason: BotReason::Random,
        }
    };

    debug!(position = %choice.position, reason = %choice.reason, "Bot chose move");
    Some(choice)
}
