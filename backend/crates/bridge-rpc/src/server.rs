//! The JSON-RPC server as a supervised [`Server`].

use crate::{RpcState, build_router};

use bridge_config::ServerConfig;
use bridge_supervisor::{Server, ShutdownGuard};

use std::io;

use async_trait::async_trait;
use log::info;
use tokio::net::TcpListener;

pub struct RpcServer {
    config: ServerConfig,
    listener: Option<TcpListener>,
}

impl RpcServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    /// Factory producing a fresh server for each supervisor start.
    pub fn factory(config: ServerConfig) -> impl Fn() -> Box<dyn Server> + Send + Sync + 'static {
        move || Box::new(RpcServer::new(config.clone())) as Box<dyn Server>
    }
}

#[async_trait]
impl Server for RpcServer {
    async fn listen(&mut self) -> io::Result<u16> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;

        // Actual bound address (port 0 is auto-assigned)
        let addr = listener.local_addr()?;
        info!("JSON-RPC server bound to {addr}");

        self.listener = Some(listener);
        Ok(addr.port())
    }

    async fn serve(self: Box<Self>, mut shutdown: ShutdownGuard) -> io::Result<()> {
        let RpcServer { listener, .. } = *self;
        let listener = listener.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "serve called before listen")
        })?;
        let port = listener.local_addr()?.port();

        let app = build_router(RpcState::new(port));

        info!("JSON-RPC server ready on port {port}");
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                info!("JSON-RPC server on port {port} draining");
            })
            .await
    }
}
