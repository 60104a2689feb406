//! Error types for the employee factory.

use thiserror::Error;

/// Errors that can occur while creating employees.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// The role selector does not name a known role.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
