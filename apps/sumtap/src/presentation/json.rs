//! JSON-lines protocol for out-of-process presentation layers.
//!
//! One JSON object per line in each direction. Inbound lines are
//! [`ClientMsg`]s, outbound are [`ServerMsg`]s.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::domain::round::RoundSnapshot;
use crate::domain::round_transition::{loss_cause, LossCause};
use crate::error::AppError;
use crate::services::game_flow::RoundView;
use crate::services::game_loop::{PlayerCommand, Presenter};

pub const PROTOCOL_VERSION: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Tap { index: usize },
    PlayAgain,
    Quit,
}

impl From<ClientMsg> for PlayerCommand {
    fn from(msg: ClientMsg) -> Self {
        match msg {
            ClientMsg::Tap { index } => PlayerCommand::Tap(index),
            ClientMsg::PlayAgain => PlayerCommand::PlayAgain,
            ClientMsg::Quit => PlayerCommand::Quit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    RoundState {
        protocol: i32,
        round_id: u64,
        /// Tile values in display order.
        tiles: Vec<u8>,
        #[serde(flatten)]
        snapshot: RoundSnapshot,
        #[serde(skip_serializing_if = "Option::is_none")]
        loss_cause: Option<LossCause>,
    },

    /// `code` is an [`ErrorCode`] for rejected input lines, or an
    /// [`AppError::code`] when the session stops on an error.
    Error {
        code: &'static str,
        message: String,
    },
}

impl ServerMsg {
    pub fn round_state(view: &RoundView<'_>) -> Self {
        ServerMsg::RoundState {
            protocol: PROTOCOL_VERSION,
            round_id: view.round_id,
            tiles: view.instance.display_order().to_vec(),
            snapshot: view.snapshot.clone(),
            loss_cause: loss_cause(&view.snapshot),
        }
    }

    /// Final message for a session that stopped on `err`.
    pub fn fatal(err: &AppError) -> Self {
        ServerMsg::Error {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
        }
    }
}

/// Parse one inbound protocol line.
pub fn parse_json_command(line: &str) -> Result<PlayerCommand, String> {
    serde_json::from_str::<ClientMsg>(line.trim())
        .map(PlayerCommand::from)
        .map_err(|e| format!("malformed message: {e}"))
}

/// Write `msg` as one protocol line.
pub fn write_line<W: Write>(out: &mut W, msg: &ServerMsg) -> Result<(), AppError> {
    let payload = serde_json::to_string(msg)?;
    writeln!(out, "{payload}")?;
    out.flush()?;
    Ok(())
}

pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn send(&mut self, msg: &ServerMsg) -> Result<(), AppError> {
        write_line(&mut self.out, msg)
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn render(&mut self, view: &RoundView<'_>) -> Result<(), AppError> {
        self.send(&ServerMsg::round_state(view))
    }

    fn reject(&mut self, message: &str) -> Result<(), AppError> {
        self.send(&ServerMsg::Error {
            code: ErrorCode::BadRequest.as_str(),
            message: message.to_string(),
        })
    }
}
