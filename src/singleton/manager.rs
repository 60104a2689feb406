use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// A unit of work handed out by the [`ProcessManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub state: String,
}

/// Keeps count of the processes started in this program.
///
/// There is meant to be exactly one of these per process; obtain it through
/// [`acquire`](super::acquire) or a [`ProcessRegistry`](super::ProcessRegistry)
/// rather than constructing it directly.
#[derive(Debug)]
pub struct ProcessManager {
    num_process: AtomicU64,
}

impl ProcessManager {
    pub(crate) fn new() -> Self {
        Self {
            num_process: AtomicU64::new(0),
        }
    }

    /// Starts a new process in the given state and bumps the counter.
    pub fn spawn(&self, state: impl Into<String>) -> Process {
        let process = Process {
            state: state.into(),
        };
        let total = self.num_process.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(state = %process.state, total, "Process spawned");
        process
    }

    /// Number of processes spawned so far.
    pub fn num_process(&self) -> u64 {
        self.num_process.load(Ordering::SeqCst)
    }
}
