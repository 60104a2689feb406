//! Error types for cursor traversal.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IteratorError {
    /// `try_next` was called after the last element had been returned.
    #[error("Iterator exhausted after {len} items")]
    Exhausted { len: usize },
}
