//! # Catalog Errors
//!
//! Each pattern module defines its own error enum. This module gathers them into a
//! single [`CatalogError`] so demonstrations and the binary can use `?` on any of them.

use crate::factory::FactoryError;
use crate::iterator::IteratorError;
use crate::strategy::{CarrierError, StrategyError};

/// Errors surfaced while running the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Iterator(#[from] IteratorError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Carrier(#[from] CarrierError),
    /// A demonstration finished but produced something it should not have.
    #[error("Demonstration '{title}' failed: {reason}")]
    Demonstration { title: String, reason: String },
}
