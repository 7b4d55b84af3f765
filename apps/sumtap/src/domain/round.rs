//! Round state machine: selections, countdown and status.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::puzzle::PuzzleInstance;
use crate::errors::domain::DomainError;

/// Round status. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundStatus::Playing => "PLAYING",
            RoundStatus::Won => "WON",
            RoundStatus::Lost => "LOST",
        }
    }
}

/// Read-only view of a round, handed to presenters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub status: RoundStatus,
    pub remaining_seconds: u32,
    /// Selected display indices, ascending.
    pub selected_indices: Vec<usize>,
    pub selected_sum: u32,
    pub target: u32,
}

/// Owns the mutable state of one round.
///
/// Every mutating call recomputes the status before returning it. Calls that
/// violate a precondition (terminal round, repeated or out-of-range index,
/// exhausted clock) leave the state untouched.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    instance: PuzzleInstance,
    selected: BTreeSet<usize>,
    selected_sum: u32,
    remaining_seconds: u32,
    status: RoundStatus,
}

impl RoundEngine {
    pub fn new(instance: PuzzleInstance, initial_seconds: u32) -> Result<Self, DomainError> {
        if initial_seconds == 0 {
            return Err(DomainError::invalid_configuration(
                "initial_seconds must be positive",
            ));
        }
        Ok(Self {
            instance,
            selected: BTreeSet::new(),
            selected_sum: 0,
            remaining_seconds: initial_seconds,
            status: RoundStatus::Playing,
        })
    }

    pub fn instance(&self) -> &PuzzleInstance {
        &self.instance
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Tap the tile at `index`.
    pub fn select(&mut self, index: usize) -> RoundStatus {
        if self.status.is_terminal() || self.selected.contains(&index) {
            return self.status;
        }
        let Some(value) = self.instance.value_at(index) else {
            return self.status;
        };

        self.selected.insert(index);
        self.selected_sum += u32::from(value);
        self.reevaluate();
        self.status
    }

    /// Advance the countdown by one second.
    ///
    /// The clock is frozen once it reaches zero or the round is over.
    pub fn tick(&mut self) -> RoundStatus {
        if self.remaining_seconds == 0 || self.status.is_terminal() {
            return self.status;
        }

        self.remaining_seconds -= 1;
        self.reevaluate();
        self.status
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            status: self.status,
            remaining_seconds: self.remaining_seconds,
            selected_indices: self.selected.iter().copied().collect(),
            selected_sum: self.selected_sum,
            target: self.instance.target(),
        }
    }

    fn reevaluate(&mut self) {
        self.status = evaluate(self.remaining_seconds, self.selected_sum, self.instance.target());
    }
}

/// Status for the given clock and sum. Timeout takes precedence.
pub fn evaluate(remaining_seconds: u32, selected_sum: u32, target: u32) -> RoundStatus {
    if remaining_seconds == 0 {
        return RoundStatus::Lost;
    }
    match selected_sum.cmp(&target) {
        std::cmp::Ordering::Less => RoundStatus::Playing,
        std::cmp::Ordering::Equal => RoundStatus::Won,
        std::cmp::Ordering::Greater => RoundStatus::Lost,
    }
}
