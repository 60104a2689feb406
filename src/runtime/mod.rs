//! Running the catalog.
//!
//! - [`Catalog`] runs a list of [`Demonstration`]s in order and collects a [`Report`]
//! - [`demos`] holds the six standard demonstrations
//! - [`setup_tracing`] initializes logging for the demo binary

pub mod catalog;
pub mod demos;
pub mod tracing;

pub use catalog::*;
pub use self::tracing::*;
