//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are scanned.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding all three squares.
    pub winner: Player,
    /// The three squares, in [`LINES`] order.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Whether `pos` is one of the three winning squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete one is
/// returned, so a board with two complete lines reports the earlier.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let winner = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(WinningLine { winner, line })
    })
}
