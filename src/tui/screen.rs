//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{GameMode, GameSession};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_click`] to drive the controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a fresh game in the given mode.
    StartGame(GameMode),
    /// Go back to the mode-selection screen.
    GoToModeSelect,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own view state, renders the session, and turns
/// input into session calls or transitions.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition;

    /// Handles a left click at terminal cell (`column`, `row`).
    ///
    /// `area` is the frame area of the last render, so the screen can
    /// recompute where its widgets were drawn.
    fn handle_click(
        &mut self,
        area: Rect,
        column: u16,
        row: u16,
        session: &mut GameSession,
    ) -> ScreenTransition;
}

/// Whether terminal cell (`column`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
