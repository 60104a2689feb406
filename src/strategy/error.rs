//! Error types for shipping cost calculation.

use thiserror::Error;

/// Errors raised by the [`Shipping`](super::Shipping) context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// `calculate` was called before any strategy was set.
    #[error("No shipping strategy set")]
    NoStrategySet,
}

/// Errors raised while looking up a carrier by name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarrierError {
    #[error("Unknown carrier: {0}")]
    Unknown(String),
}
