//! GameFlow: owns the active round and routes events into it.
//!
//! A round is the triple (puzzle, engine, clock). GameFlow is the only
//! thing that mutates the engine; it gates taps once a round is over, drops
//! ticks stamped for a discarded round, and cancels the clock as soon as
//! the engine reports a terminal status.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::puzzle::{generate, generate_seeded, PuzzleInstance};
use crate::domain::round::{RoundEngine, RoundSnapshot, RoundStatus};
use crate::domain::round_transition::{derive_round_transitions, RoundTransition};
use crate::domain::seed_derivation::derive_round_seed;
use crate::errors::domain::DomainError;
use crate::services::clock::{ClockTick, RoundClock};

/// Everything a presenter needs to draw the current round.
#[derive(Debug, Clone)]
pub struct RoundView<'a> {
    pub round_id: u64,
    pub instance: &'a PuzzleInstance,
    pub snapshot: RoundSnapshot,
}

struct ActiveRound {
    id: u64,
    engine: RoundEngine,
    clock: RoundClock,
}

pub struct GameFlow<E> {
    config: GameConfig,
    rounds_started: u64,
    tick_sink: mpsc::UnboundedSender<E>,
    current: Option<ActiveRound>,
}

impl<E> GameFlow<E>
where
    E: From<ClockTick> + Send + 'static,
{
    pub fn new(config: GameConfig, tick_sink: mpsc::UnboundedSender<E>) -> Self {
        Self {
            config,
            rounds_started: 0,
            tick_sink,
            current: None,
        }
    }

    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    /// Discard the current round (if any) and start a fresh one.
    ///
    /// Must be called from within a Tokio runtime since it starts the clock.
    pub fn start_round(&mut self) -> Result<RoundView<'_>, DomainError> {
        self.teardown_current();

        let round_id = self.rounds_started + 1;
        let instance = match self.config.seed {
            Some(seed) => generate_seeded(
                self.config.candidate_count,
                derive_round_seed(seed, round_id),
            )?,
            None => generate(self.config.candidate_count)?,
        };
        let engine = RoundEngine::new(instance, self.config.initial_seconds)?;
        let clock = RoundClock::start(round_id, self.config.tick_interval, self.tick_sink.clone());

        self.rounds_started = round_id;
        info!(
            round_id,
            candidates = self.config.candidate_count,
            target_sum = engine.instance().target(),
            seconds = self.config.initial_seconds,
            "Round started"
        );

        let active = self.current.insert(ActiveRound {
            id: round_id,
            engine,
            clock,
        });
        Ok(RoundView {
            round_id,
            instance: active.engine.instance(),
            snapshot: active.engine.snapshot(),
        })
    }

    /// "Play again": same as starting a round, named for the caller.
    pub fn play_again(&mut self) -> Result<RoundView<'_>, DomainError> {
        debug!(previous_round = self.rounds_started, "Play again requested");
        self.start_round()
    }

    /// Forward a tap. Returns the resulting status, or `None` when there is
    /// no round or the round is already over.
    pub fn on_tap(&mut self, index: usize) -> Option<RoundStatus> {
        let active = self.current.as_mut()?;
        if active.engine.status().is_terminal() {
            debug!(round_id = active.id, index, "Tap ignored: round over");
            return None;
        }
        Some(apply(active, |engine| engine.select(index)))
    }

    /// Forward a clock tick. Ticks for any round but the active one are dropped.
    pub fn on_tick(&mut self, tick: ClockTick) -> Option<RoundStatus> {
        let Some(active) = self.current.as_mut() else {
            warn!(round_id = tick.round_id, "Tick dropped: no active round");
            return None;
        };
        if tick.round_id != active.id {
            warn!(
                tick_round = tick.round_id,
                active_round = active.id,
                "Tick dropped: stale round"
            );
            return None;
        }
        if active.engine.status().is_terminal() {
            return None;
        }
        Some(apply(active, RoundEngine::tick))
    }

    pub fn view(&self) -> Option<RoundView<'_>> {
        self.current.as_ref().map(|active| RoundView {
            round_id: active.id,
            instance: active.engine.instance(),
            snapshot: active.engine.snapshot(),
        })
    }

    /// Whether the active round still has a live clock.
    pub fn clock_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|active| !active.clock.is_cancelled())
    }

    /// Drop the round and wait for its clock task to exit. Idempotent.
    pub async fn shutdown(&mut self) {
        if let Some(active) = self.current.take() {
            debug!(round_id = active.id, "Shutting down round clock");
            active.clock.shutdown().await;
        }
    }

    fn teardown_current(&mut self) {
        if let Some(mut active) = self.current.take() {
            active.clock.cancel();
            debug!(
                round_id = active.id,
                status = active.engine.status().as_str(),
                "Round discarded"
            );
        }
    }
}

/// Run one engine mutation, log what changed and stop the clock on a
/// terminal edge.
fn apply<F>(active: &mut ActiveRound, mutate: F) -> RoundStatus
where
    F: FnOnce(&mut RoundEngine) -> RoundStatus,
{
    let before = active.engine.snapshot();
    let status = mutate(&mut active.engine);
    let after = active.engine.snapshot();

    for transition in derive_round_transitions(&before, &after) {
        match &transition {
            RoundTransition::CandidateSelected { index } => {
                debug!(round_id = active.id, index, sum = after.selected_sum, "Transition: selected");
            }
            RoundTransition::ClockAdvanced { remaining_seconds } => {
                debug!(round_id = active.id, remaining_seconds, "Transition: clock");
            }
            RoundTransition::RoundWon => {
                info!(round_id = active.id, remaining = after.remaining_seconds, "Round won");
            }
            RoundTransition::RoundLost { cause } => {
                info!(round_id = active.id, ?cause, sum = after.selected_sum, "Round lost");
            }
        }
        if transition.is_terminal() {
            active.clock.cancel();
        }
    }

    status
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(seed: Option<u64>) -> GameConfig {
        GameConfig {
            candidate_count: 5,
            initial_seconds: 3,
            tick_interval: Duration::from_secs(1),
            seed,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn start_round_is_playing_with_running_clock() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut flow = GameFlow::new(config(Some(1)), tx);

        let view = flow.start_round().unwrap();
        assert_eq!(view.round_id, 1);
        assert_eq!(view.snapshot.status, RoundStatus::Playing);
        assert_eq!(view.snapshot.remaining_seconds, 3);
        assert_eq!(view.instance.candidate_count(), 5);
        assert!(flow.clock_running());
    }

    #[tokio::test(start_paused = true)]
    async fn winning_cancels_clock_and_gates_taps() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut flow = GameFlow::new(config(Some(2)), tx);
        let solution = flow.start_round().unwrap().instance.reference_solution();

        let mut last = None;
        for index in solution {
            last = flow.on_tap(index);
        }
        assert_eq!(last, Some(RoundStatus::Won));
        assert!(!flow.clock_running());

        let any_index = 0;
        assert_eq!(flow.on_tap(any_index), None);
        assert_eq!(flow.on_tick(ClockTick { round_id: 1 }), None);
        assert_eq!(flow.view().unwrap().snapshot.status, RoundStatus::Won);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_through_ticks() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut flow = GameFlow::new(config(Some(3)), tx);
        flow.start_round().unwrap();

        let tick = ClockTick { round_id: 1 };
        assert_eq!(flow.on_tick(tick), Some(RoundStatus::Playing));
        assert_eq!(flow.on_tick(tick), Some(RoundStatus::Playing));
        assert_eq!(flow.on_tick(tick), Some(RoundStatus::Lost));
        assert!(!flow.clock_running());
        assert_eq!(flow.view().unwrap().snapshot.remaining_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_are_dropped() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut flow = GameFlow::new(config(None), tx);
        flow.start_round().unwrap();
        flow.play_again().unwrap();
        assert_eq!(flow.rounds_started(), 2);

        assert_eq!(flow.on_tick(ClockTick { round_id: 1 }), None);
        assert_eq!(flow.view().unwrap().snapshot.remaining_seconds, 3);

        assert_eq!(
            flow.on_tick(ClockTick { round_id: 2 }),
            Some(RoundStatus::Playing)
        );
        assert_eq!(flow.view().unwrap().snapshot.remaining_seconds, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_rounds_replay_identically() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut first = GameFlow::new(config(Some(99)), tx.clone());
        let mut second = GameFlow::new(config(Some(99)), tx);

        let a1 = first.start_round().unwrap().instance.clone();
        let b1 = second.start_round().unwrap().instance.clone();
        assert_eq!(a1, b1);

        let a2 = first.play_again().unwrap().instance.clone();
        let b2 = second.play_again().unwrap().instance.clone();
        assert_eq!(a2, b2);
    }

    #[tokio::test(start_paused = true)]
    async fn events_without_round_are_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel::<ClockTick>();
        let mut flow = GameFlow::new(config(None), tx);
        assert_eq!(flow.on_tap(0), None);
        assert_eq!(flow.on_tick(ClockTick { round_id: 1 }), None);
        assert!(flow.view().is_none());

        flow.start_round().unwrap();
        flow.shutdown().await;
        assert!(flow.view().is_none());
        assert!(!flow.clock_running());
        // Second shutdown finds nothing to do
        flow.shutdown().await;
    }
}
