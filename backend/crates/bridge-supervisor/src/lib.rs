//! Lifecycle supervision for a single embedded network server.
//!
//! The [`Supervisor`] owns at most one running [`Server`] at a time and exposes
//! synchronous `start`, `stop` and `port` operations that are safe to call from
//! any number of threads.

mod error;
mod lifecycle;
mod outcome;
mod phase;
mod server;
mod shutdown_coordinator;
mod shutdown_guard;
mod snapshot;

#[cfg(test)]
mod tests;

pub use error::{Result as SupervisorResult, SupervisorError};
pub use lifecycle::Supervisor;
pub use outcome::{StartOutcome, StopOutcome};
pub use phase::Phase;
pub use server::{Server, ServerFactory};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use snapshot::PortSnapshot;

/// Worker threads given to each server generation's runtime.
const SERVER_WORKER_THREADS: usize = 2;
