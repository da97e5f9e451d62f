//! Controller: the state machine and event loop driving the game TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::GameSession;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{InGameScreen, ModeSelectScreen};

/// Longest wait for input before the loop redraws.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    ModeSelect(ModeSelectScreen),
    InGame(InGameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::ModeSelect(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::ModeSelect(s) => s,
            ActiveScreen::InGame(s) => s,
        }
    }
}

/// Controller that owns the session and drives the screens.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    session: GameSession,
    screen: ActiveScreen,
}

impl Controller {
    /// Creates a controller, starting in-game if the session already has a mode.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        let screen = match session.mode() {
            Some(mode) => {
                info!(%mode, "Skipping mode selection");
                ActiveScreen::InGame(InGameScreen::new())
            }
            None => ActiveScreen::ModeSelect(ModeSelectScreen::new()),
        };
        Self { session, screen }
    }

    /// The session driven by this controller.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Whether the in-game screen is showing.
    pub fn in_game(&self) -> bool {
        matches!(self.screen, ActiveScreen::InGame(_))
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            if let Some(choice) = self.session.play_bot(Instant::now()) {
                debug!(position = %choice.position, reason = %choice.reason, "Bot reply landed");
            }

            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                self.screen.as_screen().render(f, &self.session);
            })?;

            // Wake up in time for a pending bot reply.
            let timeout = self
                .session
                .time_until_bot(Instant::now())
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                let transition = match event::read()? {
                    Event::Key(key) => {
                        // Skip key release events (crossterm fires both press and release).
                        if key.kind == KeyEventKind::Release {
                            continue;
                        }
                        self.screen.as_screen_mut().handle_key(key, &mut self.session)
                    }
                    Event::Mouse(mouse)
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                    {
                        self.screen.as_screen_mut().handle_click(
                            area,
                            mouse.column,
                            mouse.row,
                            &mut self.session,
                        )
                    }
                    _ => ScreenTransition::Stay,
                };

                if !self.apply_transition(transition) {
                    info!("Quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition. Returns `false` when the user quit.
    #[instrument(skip(self))]
    pub fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame(mode) => {
                debug!(%mode, "Navigating to InGame");
                self.session.choose_mode(mode);
                self.screen = ActiveScreen::InGame(InGameScreen::new());
            }
            ScreenTransition::GoToModeSelect => {
                debug!("Navigating to ModeSelect");
                self.session.return_to_mode_selection();
                self.screen = ActiveScreen::ModeSelect(ModeSelectScreen::new());
            }
            ScreenTransition::Quit => return false,
        }
        true
    }
}
