//! Event loop: one ordered stream of clock ticks and player input.
//!
//! Ticks and input share a single channel, so events are handled strictly
//! in arrival order and each runs to completion before the next.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::AppError;
use crate::services::clock::ClockTick;
use crate::services::game_flow::{GameFlow, RoundView};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Tap the tile at a display index.
    Tap(usize),
    PlayAgain,
    Quit,
}

/// Input as delivered by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Command(PlayerCommand),
    /// A line that did not parse; reported back, otherwise ignored.
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Tick(ClockTick),
    Input(InputEvent),
}

impl From<ClockTick> for GameEvent {
    fn from(tick: ClockTick) -> Self {
        GameEvent::Tick(tick)
    }
}

impl From<PlayerCommand> for GameEvent {
    fn from(command: PlayerCommand) -> Self {
        GameEvent::Input(InputEvent::Command(command))
    }
}

/// Rendering seam. Implementations draw state; they never mutate it.
pub trait Presenter {
    fn render(&mut self, view: &RoundView<'_>) -> Result<(), AppError>;

    /// Tell the player an input line was not understood.
    fn reject(&mut self, message: &str) -> Result<(), AppError>;
}

/// Play rounds until a `Quit` command arrives.
///
/// `events_tx` must be the sender half of `events`; clocks started by the
/// loop queue their ticks through it.
pub async fn run_game<P>(
    config: GameConfig,
    events_tx: mpsc::UnboundedSender<GameEvent>,
    mut events: mpsc::UnboundedReceiver<GameEvent>,
    presenter: &mut P,
) -> Result<u64, AppError>
where
    P: Presenter + ?Sized,
{
    let mut flow = GameFlow::new(config, events_tx);

    let view = flow.start_round()?;
    presenter.render(&view)?;

    while let Some(event) = events.recv().await {
        let rerender = match event {
            GameEvent::Tick(tick) => flow.on_tick(tick).is_some(),
            GameEvent::Input(InputEvent::Command(PlayerCommand::Tap(index))) => {
                if flow.on_tap(index).is_none() {
                    debug!(index, "Tap had no effect");
                }
                true
            }
            GameEvent::Input(InputEvent::Command(PlayerCommand::PlayAgain)) => {
                flow.play_again()?;
                true
            }
            GameEvent::Input(InputEvent::Command(PlayerCommand::Quit)) => break,
            GameEvent::Input(InputEvent::Malformed(message)) => {
                warn!(%message, "Malformed input");
                presenter.reject(&message)?;
                false
            }
        };

        if rerender {
            if let Some(view) = flow.view() {
                presenter.render(&view)?;
            }
        }
    }

    let rounds = flow.rounds_started();
    flow.shutdown().await;
    info!(rounds, "Session ended");
    Ok(rounds)
}
