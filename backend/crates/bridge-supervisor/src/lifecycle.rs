//! Server lifecycle supervision.

use crate::snapshot::SnapshotCell;
use crate::{
    Phase, PortSnapshot, SERVER_WORKER_THREADS, ServerFactory, ShutdownCoordinator, StartOutcome,
    StopOutcome, SupervisorError, SupervisorResult,
};

use bridge_config::SupervisorConfig;

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;
use log::{debug, error, info, warn};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

/// Owns at most one running server and its lifecycle state.
///
/// Responsibilities:
/// - Bind exactly one server per generation, on an OS-assigned port when configured with port 0
/// - Run the server on a dedicated background runtime
/// - Drain it on stop within a bounded timeout, forcing release when it hangs
/// - Publish a lock-free port snapshot for queries
///
/// All operations block the calling thread and must not be called from
/// inside an async runtime.
pub struct Supervisor {
    factory: Box<dyn ServerFactory>,
    config: SupervisorConfig,
    state: Mutex<SupervisorState>,
    snapshot: SnapshotCell,
    finished_attempts: AtomicU64,
}

struct SupervisorState {
    phase: Phase,
    generation: u32,
    instance: Option<Instance>,
    last_failure: Option<FailedAttempt>,
}

/// One running server generation.
struct Instance {
    generation: u32,
    port: u16,
    runtime: Runtime,
    shutdown: ShutdownCoordinator,
    task: JoinHandle<io::Result<()>>,
}

/// Failure of a bind attempt, replayed to callers that queued behind it.
struct FailedAttempt {
    /// Sequence number of the attempt among finished attempts
    attempt: u64,
    kind: io::ErrorKind,
    message: String,
}

impl FailedAttempt {
    #[track_caller]
    fn replay(&self) -> SupervisorError {
        SupervisorError::BindFailure {
            source: io::Error::new(self.kind, self.message.clone()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl Supervisor {
    /// Create an idle supervisor.
    pub fn new(factory: impl ServerFactory + 'static, config: SupervisorConfig) -> Self {
        Self {
            factory: Box::new(factory),
            config,
            state: Mutex::new(SupervisorState {
                phase: Phase::Idle,
                generation: 0,
                instance: None,
                last_failure: None,
            }),
            snapshot: SnapshotCell::new(),
            finished_attempts: AtomicU64::new(0),
        }
    }

    /// Start the server, or report the one already running.
    ///
    /// Callers that were waiting while another thread's bind attempt failed
    /// receive that same failure instead of retrying.
    pub fn start(&self) -> SupervisorResult<StartOutcome> {
        let finished_before = self.finished_attempts.load(Ordering::SeqCst);
        let mut state = self.lock_state();

        if let Some(ref instance) = state.instance {
            debug!(
                "Start requested while generation {} is running on port {}",
                instance.generation, instance.port
            );
            return Ok(StartOutcome::AlreadyRunning {
                port: instance.port,
                generation: instance.generation,
            });
        }

        if let Some(ref failure) = state.last_failure
            && failure.attempt > finished_before
        {
            debug!("Start joined failed attempt {}", failure.attempt);
            return Err(failure.replay());
        }

        let generation = state.generation.wrapping_add(1);

        state.phase = Phase::Starting;
        self.publish(&state);

        let launched = self.launch(generation);
        let attempt = self.finished_attempts.fetch_add(1, Ordering::SeqCst) + 1;

        match launched {
            Ok(instance) => {
                let port = instance.port;
                info!("Server generation {generation} listening on port {port}");

                state.generation = generation;
                state.instance = Some(instance);
                state.last_failure = None;
                state.phase = Phase::Running;
                self.publish(&state);

                Ok(StartOutcome::Started { port, generation })
            }
            Err(e) => {
                error!("Failed to start server: {e}");

                if let SupervisorError::BindFailure { ref source, .. } = e {
                    state.last_failure = Some(FailedAttempt {
                        attempt,
                        kind: source.kind(),
                        message: source.to_string(),
                    });
                }
                state.phase = Phase::Idle;
                self.publish(&state);

                Err(e)
            }
        }
    }

    /// Stop the running server and wait for its teardown.
    ///
    /// Returns `ShutdownTimeout` when the drain had to be cut short; the
    /// supervisor is idle and the socket released in that case too.
    pub fn stop(&self) -> SupervisorResult<StopOutcome> {
        let mut state = self.lock_state();

        let Some(instance) = state.instance.take() else {
            debug!("Stop requested with no running server");
            return Ok(StopOutcome::AlreadyStopped);
        };

        state.phase = Phase::Stopping;
        self.publish(&state);

        let result = self.teardown(instance);

        state.phase = Phase::Idle;
        self.publish(&state);

        result
    }

    /// Current port, if a server is running. Never blocks.
    pub fn port(&self) -> Option<u16> {
        self.snapshot.load().port
    }

    /// Current phase/generation/port as of the last completed transition.
    pub fn snapshot(&self) -> PortSnapshot {
        self.snapshot.load()
    }

    fn launch(&self, generation: u32) -> SupervisorResult<Instance> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(SERVER_WORKER_THREADS)
            .thread_name(format!("bridge-server-g{generation}"))
            .enable_all()
            .build()
            .map_err(|e| SupervisorError::RuntimeInit {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let bound = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut server = self.factory.create();
            runtime
                .block_on(server.listen())
                .map(|port| (server, port))
        }));

        let (server, port) = bound
            .unwrap_or_else(|payload| {
                Err(io::Error::other(format!(
                    "server panicked while binding: {}",
                    panic_message(payload.as_ref())
                )))
            })
            .and_then(|(server, port)| {
                if port == 0 {
                    Err(io::Error::new(
                        io::ErrorKind::AddrNotAvailable,
                        "server reported port 0 after binding",
                    ))
                } else {
                    Ok((server, port))
                }
            })
            .map_err(|e| SupervisorError::BindFailure {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let shutdown = ShutdownCoordinator::new();
        let task = runtime.spawn(server.serve(shutdown.subscribe_guard()));

        Ok(Instance {
            generation,
            port,
            runtime,
            shutdown,
            task,
        })
    }

    fn teardown(&self, instance: Instance) -> SupervisorResult<StopOutcome> {
        let Instance {
            generation,
            port,
            runtime,
            shutdown,
            mut task,
        } = instance;

        info!("Stopping server generation {generation} on port {port}");
        shutdown.shutdown();

        let timeout = self.config.shutdown_timeout();
        let drained = runtime.block_on(async { tokio::time::timeout(timeout, &mut task).await });

        let result = match drained {
            Ok(Ok(Ok(()))) => {
                info!("Server generation {generation} drained");
                Ok(StopOutcome::Stopped { port, generation })
            }
            Ok(Ok(Err(e))) => {
                warn!("Server generation {generation} exited with error: {e}");
                Ok(StopOutcome::Stopped { port, generation })
            }
            Ok(Err(join_error)) => {
                error!("Server generation {generation} task failed: {join_error}");
                Ok(StopOutcome::Stopped { port, generation })
            }
            Err(_) => {
                warn!(
                    "Server generation {generation} did not drain within {}ms, forcing release",
                    self.config.shutdown_timeout_ms
                );
                task.abort();

                let grace = self.config.abort_grace();
                if runtime
                    .block_on(async { tokio::time::timeout(grace, task).await })
                    .is_err()
                {
                    error!("Server generation {generation} ignored cancellation");
                }

                Err(SupervisorError::ShutdownTimeout {
                    timeout_ms: self.config.shutdown_timeout_ms,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        };

        runtime.shutdown_timeout(self.config.abort_grace());
        debug!("Runtime for generation {generation} shut down");

        result
    }

    fn publish(&self, state: &SupervisorState) {
        let port = state.instance.as_ref().map_or(0, |i| i.port);
        self.snapshot
            .publish(PortSnapshot::new(state.phase, state.generation, port));
    }

    fn lock_state(&self) -> MutexGuard<'_, SupervisorState> {
        // Collaborator panics are caught inside start and stop, so the state
        // behind a poisoned lock is still consistent.
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("Server teardown on drop: {e}");
        }
    }
}
