//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Parses a board from nine cell characters in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `-` and `_` are empty.
    /// Whitespace and the row separators `/` and `|` are ignored.
    #[instrument]
    pub fn from_cells(cells: &str) -> Result<Self, BoardParseError> {
        let mut board = Board::new();
        let mut count = 0;
        for ch in cells
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|'))
        {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if count >= 9 {
                return Err(BoardParseError::WrongLength(count + 1));
            }
            board.squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(board)
    }

    /// Serialises the board as nine cell characters (`X`, `O`, `.`).
    pub fn to_cells(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
    /// The board did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
