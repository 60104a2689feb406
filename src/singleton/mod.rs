//! # Singleton
//!
//! One [`ProcessManager`] per process, created lazily on first request.
//!
//! ## Lifecycle
//!
//! The instance lives in a [`ProcessRegistry`]:
//!
//! 1. **Empty**: `ProcessRegistry::new()` is `const` and allocates nothing.
//! 2. **Initialized**: the first [`ProcessRegistry::acquire`] builds the manager. Racing
//!    first calls from several threads still build it exactly once; the losers block
//!    until the winner finishes and then get the same reference.
//! 3. **Lives forever**: the manager is never replaced or dropped while the registry
//!    lives. For the process-wide registry that means until the program exits.
//!
//! [`acquire`] reads the process-wide registry. Code that wants isolation (tests, mostly)
//! can own a registry of its own and pass it around instead.
//!
//! ```rust
//! use pattern_catalog::singleton;
//!
//! let first = singleton::acquire();
//! let second = singleton::acquire();
//! assert!(std::ptr::eq(first, second));
//! ```

pub mod manager;

pub use manager::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::info;

static PROCESS_REGISTRY: ProcessRegistry = ProcessRegistry::new();

/// Returns the process-wide [`ProcessManager`], creating it on first use.
pub fn acquire() -> &'static ProcessManager {
    PROCESS_REGISTRY.acquire()
}

/// The process-wide registry behind [`acquire`].
pub fn registry() -> &'static ProcessRegistry {
    &PROCESS_REGISTRY
}

/// Lazily constructed home of a single [`ProcessManager`].
#[derive(Debug)]
pub struct ProcessRegistry {
    manager: OnceLock<ProcessManager>,
    constructions: AtomicUsize,
}

impl ProcessRegistry {
    pub const fn new() -> Self {
        Self {
            manager: OnceLock::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Returns the manager, constructing it if this is the first call.
    pub fn acquire(&self) -> &ProcessManager {
        self.manager.get_or_init(|| {
            let count = self.constructions.fetch_add(1, Ordering::SeqCst) + 1;
            info!(count, "ProcessManager constructed");
            ProcessManager::new()
        })
    }

    /// Whether the manager has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.manager.get().is_some()
    }

    /// How many managers this registry has built. Never more than 1.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}
