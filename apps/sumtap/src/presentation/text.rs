//! Plain-text presenter for interactive terminal play.

use std::fmt::Write as _;
use std::io::Write;

use crate::domain::round::RoundStatus;
use crate::domain::round_transition::{loss_cause, LossCause};
use crate::error::AppError;
use crate::services::game_flow::RoundView;
use crate::services::game_loop::{PlayerCommand, Presenter};

const HELP: &str = "tile number to tap, 'a' to play again, 'q' to quit";

/// Parse one input line typed by the player.
pub fn parse_text_command(line: &str) -> Result<PlayerCommand, String> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "q" | "quit" | "exit" => Ok(PlayerCommand::Quit),
        "a" | "again" | "play again" => Ok(PlayerCommand::PlayAgain),
        other => other
            .parse::<usize>()
            .map(PlayerCommand::Tap)
            .map_err(|_| format!("unrecognized input '{other}' ({HELP})")),
    }
}

/// Render a round as a few lines of text.
///
/// Selected tiles are bracketed, e.g. `2:[7]`.
pub fn render_text(view: &RoundView<'_>) -> String {
    let snap = &view.snapshot;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Round {} | target {} | {} | {}s left",
        view.round_id,
        snap.target,
        snap.status.as_str(),
        snap.remaining_seconds
    );

    let tiles: Vec<String> = view
        .instance
        .display_order()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if snap.selected_indices.contains(&index) {
                format!("{index}:[{value}]")
            } else {
                format!("{index}: {value} ")
            }
        })
        .collect();
    let _ = writeln!(out, "  {}", tiles.join("  "));
    let _ = writeln!(out, "  sum {} / {}", snap.selected_sum, snap.target);

    match snap.status {
        RoundStatus::Playing => {}
        RoundStatus::Won => {
            let _ = writeln!(out, "You won! 'a' to play again, 'q' to quit.");
        }
        RoundStatus::Lost => {
            let reason = match loss_cause(snap) {
                Some(LossCause::Timeout) => "Time's up.",
                Some(LossCause::Overshoot) => "Too high.",
                None => "Round lost.",
            };
            let answer: Vec<String> = view
                .instance
                .reference_solution()
                .iter()
                .filter_map(|&index| view.instance.value_at(index))
                .map(|value| value.to_string())
                .collect();
            let _ = writeln!(
                out,
                "{reason} One answer: {} = {}. 'a' to play again, 'q' to quit.",
                answer.join(" + "),
                snap.target
            );
        }
    }

    out
}

pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, view: &RoundView<'_>) -> Result<(), AppError> {
        self.out.write_all(render_text(view).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn reject(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.out, "? {message}")?;
        self.out.flush()?;
        Ok(())
    }
}
