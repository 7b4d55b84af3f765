use thiserror::Error;

use crate::errors::domain::DomainError;

/// Application-edge error: everything that can stop the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Protocol error: {detail}")]
    Protocol { detail: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code, surfaced in JSON error messages.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Domain(DomainError::InvalidConfiguration(_)) => "INVALID_CONFIGURATION",
            AppError::Domain(DomainError::InvalidInstance(_)) => "INVALID_INSTANCE",
            AppError::Protocol { .. } => "PROTOCOL_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::protocol(e.to_string())
    }
}
