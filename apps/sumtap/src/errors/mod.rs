//! Error handling for sumtap.

pub mod domain;

pub use domain::DomainError;
