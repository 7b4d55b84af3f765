//! Round clock: the periodic tick source that drives the countdown.
//!
//! The clock never touches a `RoundEngine`. It only queues [`ClockTick`]s
//! into the game's event channel, stamped with the round that started it.
//! Whoever owns the clock must cancel it when the round ends or is
//! discarded; dropping a `RoundClock` cancels it as well.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// One elapsed period for the round identified by `round_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub round_id: u64,
}

pub struct RoundClock {
    round_id: u64,
    cancellation_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RoundClock {
    /// Start ticking every `period`, first tick one full period from now.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<E>(round_id: u64, period: Duration, sink: mpsc::UnboundedSender<E>) -> Self
    where
        E: From<ClockTick> + Send + 'static,
    {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;

                    _ = token.cancelled() => {
                        trace!(round_id, "clock=cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if sink.send(E::from(ClockTick { round_id })).is_err() {
                            trace!(round_id, "clock=receiver_gone");
                            break;
                        }
                    }
                }
            }
        });

        trace!(round_id, period_ms = period.as_millis() as u64, "clock=started");

        Self {
            round_id,
            cancellation_token,
            task: Some(task),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    /// Stop emitting ticks. Idempotent.
    pub fn cancel(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            trace!(round_id = self.round_id, "clock=cancel");
        }
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Cancel and wait until the tick task has fully exited.
    pub async fn shutdown(mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RoundClock {
    fn drop(&mut self) {
        self.cancel();
    }
}
