//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the demo binary.
//!
//! ## Configuration
//!
//! The only knob is the `RUST_LOG` environment variable, read through
//! `EnvFilter::from_default_env()`. Nothing is logged when it is unset.
//!
//! Logs are written to **stderr** in the compact format with module paths hidden
//! (`with_target(false)`), so stdout carries nothing but the demonstration output.
//!
//! ## What Gets Traced
//!
//! - **Catalog**: one `demonstration{title=..}` span per pattern, with a completion event
//! - **Successful operations** (`debug`): employee creation, strategy changes,
//!   subscriptions, user builds
//! - **Failed operations** (`warn`): unknown roles, exhausted cursors, missing strategies
//! - **Per-callback notifications** (`trace`): every observer call during `fire`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demonstration output only
//! cargo run
//!
//! # Add one line per demonstration on stderr
//! RUST_LOG=info cargo run
//!
//! # Everything, including each observer notification
//! RUST_LOG=trace cargo run
//!
//! # Only the observer module
//! RUST_LOG=pattern_catalog::observer=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` the Strategy demonstration looks like:
//!
//! ```text
//! INFO demonstration: Running title="Strategy"
//! DEBUG demonstration: Strategy set carrier="Fedex"
//! DEBUG demonstration: Calculated carrier="Fedex" cost=2.45
//! ...
//! INFO demonstration: Completed title="Strategy" lines=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
