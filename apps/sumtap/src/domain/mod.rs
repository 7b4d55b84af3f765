//! Domain layer: pure round logic, no IO and no clocks.

pub mod puzzle;
pub mod round;
pub mod round_transition;
pub mod seed_derivation;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_round;

// Re-exports for ergonomics
pub use puzzle::{generate, generate_seeded, generate_with_rng, PuzzleInstance};
pub use round::{RoundEngine, RoundSnapshot, RoundStatus};
pub use round_transition::{derive_round_transitions, LossCause, RoundTransition};
pub use seed_derivation::derive_round_seed;
