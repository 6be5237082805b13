use bridge_config::Config;
use bridge_rpc::RpcServer;
use bridge_supervisor::{Phase, StartOutcome, StopOutcome, Supervisor, SupervisorError};

use log::{error, info, warn};

/// Port value reported when no server is running.
pub const NO_SERVER_PORT: i32 = -1;

/// Synchronous control surface over one supervised JSON-RPC server.
///
/// Construct once at host startup and share it (for example behind an
/// `Arc`) with every thread that dispatches host calls.
pub struct HostBridge {
    supervisor: Supervisor,
}

impl HostBridge {
    pub fn new(config: &Config) -> Self {
        Self::with_supervisor(Supervisor::new(
            RpcServer::factory(config.server.clone()),
            config.supervisor.clone(),
        ))
    }

    pub fn with_supervisor(supervisor: Supervisor) -> Self {
        Self { supervisor }
    }

    /// Start the server if needed and return its port, or `-1` on failure.
    pub fn start_server(&self) -> i32 {
        match self.supervisor.start() {
            Ok(StartOutcome::Started { port, generation }) => {
                info!("Host started server generation {generation} on port {port}");
                i32::from(port)
            }
            Ok(StartOutcome::AlreadyRunning { port, .. }) => i32::from(port),
            Err(e) => {
                error!("Host failed to start server: {e}");
                error!("  hint: {}", e.recovery_hint());
                NO_SERVER_PORT
            }
        }
    }

    /// Stop the server. `false` only when teardown had to be forced.
    pub fn stop_server(&self) -> bool {
        match self.supervisor.stop() {
            Ok(StopOutcome::Stopped { port, generation }) => {
                info!("Host stopped server generation {generation} (port {port})");
                true
            }
            Ok(StopOutcome::AlreadyStopped) => true,
            Err(e @ SupervisorError::ShutdownTimeout { .. }) => {
                warn!("Host stop forced: {e}");
                false
            }
            Err(e) => {
                error!("Host failed to stop server: {e}");
                false
            }
        }
    }

    /// Current port, or [`NO_SERVER_PORT`] when idle. Never blocks.
    pub fn get_server_port(&self) -> i32 {
        self.supervisor
            .port()
            .map_or(NO_SERVER_PORT, i32::from)
    }

    /// One-line human readable state, e.g. `running (generation 2, port 51234)`.
    pub fn status(&self) -> String {
        let snapshot = self.supervisor.snapshot();
        match (snapshot.phase, snapshot.port) {
            (Phase::Running, Some(port)) => format!(
                "running (generation {}, port {port})",
                snapshot.generation
            ),
            (phase, _) => format!("{phase} (generation {})", snapshot.generation),
        }
    }
}
