//! In-game screen: status line, board, and the reset / change-mode buttons.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::Position;
use tracing::{debug, info, instrument};

use crate::session::HUMAN;
use crate::tui::board::{cell_at, render_board};
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition, hit};
use crate::{GameMode, GameSession};

/// State for the in-game screen.
#[derive(Debug)]
pub struct InGameScreen {
    cursor: Position,
    notice: Option<String>,
}

struct InGameLayout {
    title: Rect,
    status: Rect,
    board: Rect,
    reset_button: Rect,
    mode_button: Rect,
    help: Rect,
}

impl InGameLayout {
    fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        Self {
            title: chunks[0],
            status: chunks[1],
            board: chunks[2],
            reset_button: buttons[0],
            mode_button: buttons[1],
            help: chunks[4],
        }
    }
}

impl InGameScreen {
    /// Creates a new in-game screen with the cursor on the center square.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing InGameScreen");
        Self {
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejected-move message, cleared by the next accepted input.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[instrument(skip(self, session))]
    fn click_square(&mut self, pos: Position, session: &mut GameSession) {
        self.cursor = pos;
        match session.click(pos) {
            Ok(mov) => {
                debug!(%mov, "Square clicked");
                self.notice = None;
            }
            Err(e) => {
                debug!(error = %e, "Click rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self, session: &mut GameSession) {
        info!("Reset requested");
        session.reset();
        self.notice = None;
    }

    fn help_text(&self, session: &GameSession) -> String {
        if let Some(notice) = self.notice() {
            return notice.to_string();
        }
        if session.is_bot_thinking() {
            return "Bot is thinking…".to_string();
        }
        match session.mode() {
            Some(GameMode::Bot) => format!(
                "You are {} | Click or 1-9 / arrows + Enter | R: Reset | M: Mode | Q: Quit",
                HUMAN
            ),
            _ => "Click or 1-9 / arrows + Enter | R: Reset | M: Mode | Q: Quit".to_string(),
        }
    }
}

impl Default for InGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn button(label: &str) -> Paragraph<'_> {
    Paragraph::new(label)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let layout = InGameLayout::new(frame.area());

        let mode_label = session.mode().map(GameMode::label).unwrap_or_default();
        let title = Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(mode_label));
        frame.render_widget(title, layout.title);

        let status_color = match session.game().outcome() {
            Some(outcome) if outcome.is_draw() => Color::Magenta,
            Some(_) => Color::Green,
            None => Color::Yellow,
        };
        let status = Paragraph::new(session.status())
            .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout.status);

        render_board(
            frame,
            layout.board,
            session.board(),
            session.winning_line(),
            Some(self.cursor()),
        );

        frame.render_widget(button("Reset Game"), layout.reset_button);
        frame.render_widget(button("Change Game Mode"), layout.mode_button);

        let help = Paragraph::new(self.help_text(session))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset(session);
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                ScreenTransition::GoToModeSelect
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.click_square(pos, session);
                }
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click_square(self.cursor, session);
                ScreenTransition::Stay
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, session))]
    fn handle_click(
        &mut self,
        area: Rect,
        column: u16,
        row: u16,
        session: &mut GameSession,
    ) -> ScreenTransition {
        let layout = InGameLayout::new(area);
        if let Some(pos) = cell_at(layout.board, column, row) {
            self.click_square(pos, session);
            ScreenTransition::Stay
        } else if hit(layout.reset_button, column, row) {
            self.reset(session);
            ScreenTransition::Stay
        } else if hit(layout.mode_button, column, row) {
            ScreenTransition::GoToModeSelect
        } else {
            ScreenTransition::Stay
        }
    }
}
