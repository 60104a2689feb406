//! # Pattern Catalog Demo
//!
//! Runs the six standard demonstrations in order and prints their output:
//!
//! 1. Factory Method
//! 2. Singleton
//! 3. Strategy
//! 4. Iterator
//! 5. Observer
//! 6. Builder
//!
//! Set `RUST_LOG` to see what happens underneath (logs go to stderr).

use pattern_catalog::runtime::{setup_tracing, Catalog};
use pattern_catalog::CatalogError;
use tracing::{error, info};

fn main() -> Result<(), CatalogError> {
    setup_tracing();

    info!("Starting pattern catalog");

    let catalog = Catalog::standard();
    let report = catalog.run().inspect_err(|e| {
        error!(error = %e, "Catalog run failed");
    })?;

    print!("{report}");

    info!(sections = report.sections().len(), "Catalog completed successfully");
    Ok(())
}
