//! Mode selection screen: play against the bot or a friend.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition, hit};
use crate::{GameMode, GameSession};

/// State for the mode selection screen.
#[derive(Debug, Default)]
pub struct ModeSelectScreen {
    selected: usize,
}

struct ModeSelectLayout {
    title: Rect,
    menu: Rect,
    help: Rect,
}

impl ModeSelectLayout {
    fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);
        Self {
            title: chunks[0],
            menu: chunks[1],
            help: chunks[2],
        }
    }

    /// Index of the option under (`column`, `row`), inside the menu border.
    fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = Rect {
            x: self.menu.x.saturating_add(1),
            y: self.menu.y.saturating_add(1),
            width: self.menu.width.saturating_sub(2),
            height: self.menu.height.saturating_sub(2),
        };
        if !hit(inner, column, row) {
            return None;
        }
        let index = usize::from(row - inner.y);
        (index < modes().len()).then_some(index)
    }
}

fn modes() -> Vec<GameMode> {
    GameMode::iter().collect()
}

impl ModeSelectScreen {
    /// Creates a new mode selection screen with the bot highlighted.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ModeSelectScreen");
        Self::default()
    }

    /// Currently highlighted mode.
    pub fn selected_mode(&self) -> GameMode {
        let modes = modes();
        modes[self.selected.min(modes.len() - 1)]
    }

    fn select_previous(&mut self) {
        let count = modes().len();
        self.selected = (self.selected + count - 1) % count;
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % modes().len();
    }
}

impl Screen for ModeSelectScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession) {
        let layout = ModeSelectLayout::new(frame.area());

        let title = Paragraph::new("Select Game Mode")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        let items: Vec<ListItem> = modes()
            .into_iter()
            .map(|mode| ListItem::new(mode.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Mode"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(menu, layout.menu, &mut list_state);

        let help =
            Paragraph::new("↑↓: Navigate | Enter/click: Select | B: Bot | F: Friend | Q: Quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let mode = self.selected_mode();
                info!(%mode, "Mode selected");
                ScreenTransition::StartGame(mode)
            }
            KeyCode::Char('b') | KeyCode::Char('B') => ScreenTransition::StartGame(GameMode::Bot),
            KeyCode::Char('f') | KeyCode::Char('F') => {
                ScreenTransition::StartGame(GameMode::Friend)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, _session))]
    fn handle_click(
        &mut self,
        area: Rect,
        column: u16,
        row: u16,
        _session: &mut GameSession,
    ) -> ScreenTransition {
        match ModeSelectLayout::new(area).option_at(column, row) {
            Some(index) => {
                self.selected = index;
                let mode = self.selected_mode();
                info!(%mode, "Mode clicked");
                ScreenTransition::StartGame(mode)
            }
            None => ScreenTransition::Stay,
        }
    }
}
