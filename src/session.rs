//! Game-state holder: board, turn, mode and the bot's pending reply.

use crate::{AppConfig, GameMode};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tictactoe_core::{
    Board, BotChoice, Game, Move, MoveError, Player, Position, WinningLine, choose_move,
};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human in bot mode.
pub const HUMAN: Player = Player::X;

/// Mark played by the bot in bot mode.
pub const BOT: Player = Player::O;

/// One game on one screen.
///
/// The board only changes through [`click`](Self::click),
/// [`play_bot`](Self::play_bot), [`reset`](Self::reset) and the mode
/// switches. A bot reply is stored as a deadline; the event loop asks
/// [`bot_due`](Self::bot_due) and then calls [`play_bot`](Self::play_bot).
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    mode: Option<GameMode>,
    bot_delay: Duration,
    bot_deadline: Option<Instant>,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates a session on the mode-selection screen.
    #[instrument(skip(rng))]
    pub fn new(bot_delay: Duration, rng: ChaCha8Rng) -> Self {
        Self {
            game: Game::new(),
            mode: None,
            bot_delay,
            bot_deadline: None,
            rng,
        }
    }

    /// Creates a session from configuration, starting in the configured mode if any.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut session = Self::new(config.bot_delay(), rng);
        if let Some(mode) = config.default_mode() {
            session.choose_mode(*mode);
        }
        session
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.game.to_move()
    }

    /// Selected mode, `None` while on the mode-selection screen.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// The completed line, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game.winning_line()
    }

    /// Whether a bot reply is scheduled.
    pub fn is_bot_thinking(&self) -> bool {
        self.bot_deadline.is_some()
    }

    /// Status line: the winner, a draw, or whose turn it is.
    pub fn status(&self) -> String {
        match self.game.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("Player: {}'s Turn", self.game.to_move()),
        }
    }

    /// Selects a mode and starts a fresh board.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self, mode: GameMode) {
        info!(%mode, "Game mode selected");
        self.mode = Some(mode);
        self.reset();
    }

    /// Goes back to mode selection with a fresh board.
    #[instrument(skip(self))]
    pub fn return_to_mode_selection(&mut self) {
        info!("Returning to mode selection");
        self.mode = None;
        self.reset();
    }

    /// Clears the board and gives the move to X. Keeps the mode.
    ///
    /// Any scheduled bot reply is dropped with the old board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.bot_deadline.take().is_some() {
            debug!("Cancelled pending bot move");
        }
        self.game.reset();
    }

    /// Human click at `pos`, timed now.
    pub fn click(&mut self, pos: Position) -> Result<Move, MoveError> {
        self.click_at(pos, Instant::now())
    }

    /// Human click at `pos`, at time `now`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NoModeSelected`] before a mode is chosen.
    /// - [`MoveError::GameOver`] once a line is complete or the board is full.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    /// - [`MoveError::NotYourTurn`] with [`HUMAN`] in bot mode while the bot is to move.
    #[instrument(skip(self, now))]
    pub fn click_at(&mut self, pos: Position, now: Instant) -> Result<Move, MoveError> {
        let mode = self.mode.ok_or(MoveError::NoModeSelected)?;
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        if mode.has_bot() && self.game.to_move() == BOT {
            return Err(MoveError::NotYourTurn(HUMAN));
        }

        let mov = self.game.place(pos)?;
        debug!(%mov, "Human move applied");

        if mode.has_bot() && !self.game.is_over() {
            let due = now + self.bot_delay;
            debug!(delay_ms = self.bot_delay.as_millis() as u64, "Bot move scheduled");
            self.bot_deadline = Some(due);
        }
        Ok(mov)
    }

    /// Time left before the scheduled bot reply, if one is pending.
    pub fn time_until_bot(&self, now: Instant) -> Option<Duration> {
        self.bot_deadline.map(|due| due.saturating_duration_since(now))
    }

    /// Whether a scheduled bot reply is ready to play at `now`.
    pub fn bot_due(&self, now: Instant) -> bool {
        self.bot_deadline.is_some_and(|due| now >= due)
    }

    /// Plays the bot's reply if it is due at `now`.
    ///
    /// Returns `None` when nothing is due, or when the board no longer
    /// calls for a bot move.
    #[instrument(skip(self, now))]
    pub fn play_bot(&mut self, now: Instant) -> Option<BotChoice> {
        if !self.bot_due(now) {
            return None;
        }
        self.bot_deadline = None;

        if self.mode != Some(GameMode::Bot) || self.game.to_move() != BOT || self.game.is_over() {
            debug!("Bot move no longer applicable");
            return None;
        }

        let choice = choose_move(self.game.board(), BOT, &mut self.rng)?;
        match self.game.place(choice.position) {
            Ok(mov) => {
                info!(%mov, reason = %choice.reason, "Bot moved");
                Some(choice)
            }
            Err(e) => {
                warn!(error = %e, position = %choice.position, "Bot move rejected");
                None
            }
        }
    }
}
