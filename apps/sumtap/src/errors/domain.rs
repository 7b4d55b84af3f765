//! Domain-level error type for puzzle generation and round construction.
//!
//! This error type is IO- and presentation-agnostic. The application edge
//! returns `Result<T, crate::error::AppError>` and converts from
//! `DomainError` through the provided `From` implementation.

use thiserror::Error;

/// Central domain error type.
///
/// Invalid taps and late ticks are not errors: the engine ignores them.
/// Only inputs that make a round impossible to start end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Round parameters that cannot produce a playable round
    /// (fewer than 3 candidates, zero initial seconds).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Explicit generation inputs that do not form a puzzle instance.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}

impl DomainError {
    pub fn invalid_configuration(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(detail.into())
    }

    pub fn invalid_instance(detail: impl Into<String>) -> Self {
        Self::InvalidInstance(detail.into())
    }
}
