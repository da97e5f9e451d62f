//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human plays X, the heuristic bot plays O.
    Bot,
    /// Two humans share the board.
    Friend,
}

impl GameMode {
    /// Returns the menu label.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Bot => "Play with Bot",
            GameMode::Friend => "Play with Friend",
        }
    }

    /// Whether O is computer-controlled.
    pub fn has_bot(self) -> bool {
        matches!(self, GameMode::Bot)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Bot => write!(f, "bot"),
            GameMode::Friend => write!(f, "friend"),
        }
    }
}
