//! Presentation adapters: turn snapshots into output and input lines into
//! player commands. No game logic lives here.

pub mod json;
pub mod text;

use crate::services::game_loop::PlayerCommand;

pub use json::{parse_json_command, JsonPresenter};
pub use text::{parse_text_command, TextPresenter};

/// Wire format spoken on stdin/stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Json,
}

impl InputMode {
    /// Parse a line according to this mode. Blank lines yield `None`.
    pub fn parse_line(self, line: &str) -> Option<Result<PlayerCommand, String>> {
        if line.trim().is_empty() {
            return None;
        }
        Some(match self {
            InputMode::Text => parse_text_command(line),
            InputMode::Json => parse_json_command(line),
        })
    }
}
