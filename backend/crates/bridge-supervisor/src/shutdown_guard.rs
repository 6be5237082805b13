use tokio::sync::watch;

/// Serving-side half of a [`ShutdownCoordinator`](crate::ShutdownCoordinator)
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(shutdown_rx: watch::Receiver<bool>) -> Self {
        Self { shutdown_rx }
    }

    /// Wait for the shutdown signal.
    ///
    /// Also returns when the coordinator is dropped, so an orphaned server
    /// never outlives its supervisor.
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.wait_for(|triggered| *triggered).await;
    }
}
