use crate::ShutdownGuard;

use tokio::sync::watch;

/// Shutdown signal shared between the supervisor and one server generation
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { shutdown_tx }
    }

    /// Trigger shutdown. Guards created before or after this call all fire.
    pub fn shutdown(&self) {
        log::debug!("Shutdown signal raised");
        self.shutdown_tx.send_replace(true);
    }

    /// Create a guard for the serving side
    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.shutdown_tx.subscribe())
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
