#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Catalog
//!
//! > **Six classic design patterns, written the Rust way.**
//!
//! This crate demonstrates Factory Method, Singleton, Strategy, Iterator, Observer and
//! Builder with small toy domains (employees, a process manager, shipping carriers).
//! Every pattern lives in its own module, owns its own error type, and can be exercised
//! directly through its public API or through the [`runtime::Catalog`] that runs all
//! six in sequence.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Fail loudly
//! The classic textbook versions of these patterns silently return nothing on bad
//! input (an unknown employee role, an exhausted iterator, a context with no strategy).
//! Here each of those cases is a named error variant:
//! - [`FactoryError::UnknownRole`](factory::FactoryError::UnknownRole)
//! - [`IteratorError::Exhausted`](iterator::IteratorError::Exhausted)
//! - [`StrategyError::NoStrategySet`](strategy::StrategyError::NoStrategySet)
//!
//! All of them convert into [`CatalogError`] via `#[from]`, so `?` works across modules.
//!
//! ### No ambient globals
//! The only process-wide state is the [`singleton::ProcessRegistry`] behind
//! [`singleton::acquire`]. Its lifecycle is documented, and callers can build their own
//! registry when they want an isolated one (tests do exactly that).
//!
//! ### Absent is not zero
//! Optional attributes are `Option<_>`, never sentinel values. A [`builder::User`]
//! without a phone has `phone == None`, which is different from `Some(String::new())`.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Pattern | Key items |
//! |--------|---------|-----------|
//! | [`factory`] | Factory Method | [`EmployeeFactory`](factory::EmployeeFactory), [`RoleSelector`](factory::RoleSelector) |
//! | [`singleton`] | Singleton | [`acquire`](singleton::acquire), [`ProcessRegistry`](singleton::ProcessRegistry) |
//! | [`strategy`] | Strategy | [`Shipping`](strategy::Shipping), [`ShippingStrategy`](strategy::ShippingStrategy) |
//! | [`iterator`] | Iterator | [`Cursor`](iterator::Cursor), [`Item`](iterator::Item) |
//! | [`observer`] | Observer | [`Subject`](observer::Subject), [`Observer`](observer::Observer) |
//! | [`builder`] | Builder | [`User`](builder::User), [`UserBuilder`](builder::UserBuilder) |
//! | [`runtime`] | - | [`Catalog`](runtime::Catalog), [`setup_tracing`](runtime::setup_tracing) |
//!
//! ## 👩‍💻 Observability
//!
//! We use `tracing` everywhere. Failed operations emit `warn!` events with the offending
//! input, and every demonstration runs inside its own span.
//! See the [`runtime::tracing`] module for details.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run all six demonstrations
//! cargo run
//!
//! # Same, with debug logs on stderr
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod builder;
pub mod error;
pub mod factory;
pub mod iterator;
pub mod observer;
pub mod runtime;
pub mod singleton;
pub mod strategy;

pub use error::CatalogError;
