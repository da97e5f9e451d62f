//! Game engine for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::rules::{WinningLine, check_winner};
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, player to move and move history.
///
/// [`Game::place`] is the only way marks reach the board, so the turn
/// always alternates starting with X.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(&self.board)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|win| win.winner)
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Whether no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Places the current player's mark at `pos` and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a line is complete or the board is full.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mov = Move::new(self.to_move, pos);
        self.board.set(pos, Square::Occupied(mov.player));
        self.history.push(mov);
        self.to_move = mov.player.opponent();
        debug!(%mov, "Move applied");
        Ok(mov)
    }

    /// Clears the board and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
