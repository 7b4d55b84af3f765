#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod presentation;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{ConfigOverrides, GameConfig};
pub use domain::{generate, PuzzleInstance, RoundEngine, RoundSnapshot, RoundStatus};
pub use error::AppError;
pub use errors::DomainError;
pub use services::{run_game, GameEvent, InputEvent, PlayerCommand, Presenter, RoundView};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
