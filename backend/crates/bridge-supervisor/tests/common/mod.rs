#![allow(dead_code)]

//! Test infrastructure for supervisor tests

use bridge_config::SupervisorConfig;
use bridge_supervisor::{Server, ShutdownGuard, Supervisor};

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;

/// How a stub server behaves once created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubBehavior {
    /// Bind, serve until shutdown, release
    Healthy,
    /// Fail to bind
    FailListen,
    /// Panic while binding
    PanicListen,
    /// Bind, then ignore the shutdown signal
    IgnoreShutdown,
    /// Bind, then return an error from serve immediately
    ServeError,
}

/// Counters shared between a test and the stubs it creates
#[derive(Debug, Default)]
pub struct StubCounters {
    /// Number of listen() calls
    pub listens: AtomicUsize,
    /// Listening sockets currently held by stubs
    pub live_listeners: AtomicUsize,
}

impl StubCounters {
    pub fn listens(&self) -> usize {
        self.listens.load(Ordering::SeqCst)
    }

    pub fn live_listeners(&self) -> usize {
        self.live_listeners.load(Ordering::SeqCst)
    }
}

/// Decrements the live listener count when the socket goes away
struct LiveListener {
    listener: TcpListener,
    counters: Arc<StubCounters>,
}

impl Drop for LiveListener {
    fn drop(&mut self) {
        self.counters.live_listeners.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct StubServer {
    behavior: StubBehavior,
    listen_delay: Duration,
    counters: Arc<StubCounters>,
    listener: Option<LiveListener>,
}

#[async_trait]
impl Server for StubServer {
    async fn listen(&mut self) -> io::Result<u16> {
        self.counters.listens.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.listen_delay).await;

        if self.behavior == StubBehavior::PanicListen {
            panic!("listener setup exploded");
        }

        if self.behavior == StubBehavior::FailListen {
            return Err(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                "no ephemeral ports left",
            ));
        }

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        self.counters.live_listeners.fetch_add(1, Ordering::SeqCst);
        self.listener = Some(LiveListener {
            listener,
            counters: self.counters.clone(),
        });

        Ok(port)
    }

    async fn serve(self: Box<Self>, mut shutdown: ShutdownGuard) -> io::Result<()> {
        let StubServer {
            behavior, listener, ..
        } = *self;
        let Some(live) = listener else {
            return Err(io::Error::other("serve called before listen"));
        };

        match behavior {
            StubBehavior::Healthy => {
                loop {
                    tokio::select! {
                        _ = shutdown.wait() => break,
                        accepted = live.listener.accept() => drop(accepted),
                    }
                }
                Ok(())
            }
            StubBehavior::IgnoreShutdown => {
                let _held = live;
                std::future::pending::<()>().await;
                Ok(())
            }
            StubBehavior::ServeError => Err(io::Error::other("accept loop crashed")),
            StubBehavior::FailListen | StubBehavior::PanicListen => Ok(()),
        }
    }
}

/// Build a supervisor whose factory produces stubs with the given behavior
pub fn stub_supervisor(
    behavior: StubBehavior,
    listen_delay: Duration,
    config: SupervisorConfig,
) -> (Supervisor, Arc<StubCounters>) {
    let counters = Arc::new(StubCounters::default());
    let factory_counters = counters.clone();

    let supervisor = Supervisor::new(
        move || -> Box<dyn Server> {
            Box::new(StubServer {
                behavior,
                listen_delay,
                counters: factory_counters.clone(),
                listener: None,
            })
        },
        config,
    );

    (supervisor, counters)
}

/// Short teardown bounds so timeout tests stay fast
pub fn fast_config() -> SupervisorConfig {
    SupervisorConfig {
        shutdown_timeout_ms: 200,
        abort_grace_ms: 200,
    }
}
