// apps/sumtap/src/domain/round_transition.rs

use serde::Serialize;

use crate::domain::round::{RoundSnapshot, RoundStatus};

/// Why a round ended in `LOST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// The countdown reached zero.
    Timeout,
    /// The selected sum passed the target.
    Overshoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTransition {
    /// Edge-triggered: a display index joined the selection.
    CandidateSelected { index: usize },

    /// Edge-triggered: the countdown moved.
    ClockAdvanced { remaining_seconds: u32 },

    /// Edge-triggered: Playing -> Won
    RoundWon,

    /// Edge-triggered: Playing -> Lost
    RoundLost { cause: LossCause },
}

impl RoundTransition {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RoundTransition::RoundWon | RoundTransition::RoundLost { .. }
        )
    }
}

/// Derive round transitions from before/after snapshots.
pub fn derive_round_transitions(before: &RoundSnapshot, after: &RoundSnapshot) -> Vec<RoundTransition> {
    let mut transitions = Vec::new();

    // 1. New selections (selection only ever grows)
    for &index in &after.selected_indices {
        if !before.selected_indices.contains(&index) {
            transitions.push(RoundTransition::CandidateSelected { index });
        }
    }

    // 2. Clock movement
    if after.remaining_seconds != before.remaining_seconds {
        transitions.push(RoundTransition::ClockAdvanced {
            remaining_seconds: after.remaining_seconds,
        });
    }

    // 3. Terminal edge
    if before.status == RoundStatus::Playing {
        match after.status {
            RoundStatus::Playing => {}
            RoundStatus::Won => transitions.push(RoundTransition::RoundWon),
            RoundStatus::Lost => {
                let cause = if after.remaining_seconds == 0 {
                    LossCause::Timeout
                } else {
                    LossCause::Overshoot
                };
                transitions.push(RoundTransition::RoundLost { cause });
            }
        }
    }

    transitions
}

/// Cause of a finished loss, read off a snapshot.
pub fn loss_cause(snapshot: &RoundSnapshot) -> Option<LossCause> {
    match snapshot.status {
        RoundStatus::Lost if snapshot.remaining_seconds == 0 => Some(LossCause::Timeout),
        RoundStatus::Lost => Some(LossCause::Overshoot),
        _ => None,
    }
}
