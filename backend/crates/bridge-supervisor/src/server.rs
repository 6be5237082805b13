use crate::ShutdownGuard;

use std::io;

use async_trait::async_trait;

/// A network server the supervisor can run.
///
/// One value is created per start. `listen` binds the socket on the calling
/// thread's behalf; `serve` then runs on the supervisor's background runtime
/// until the guard fires, and must release the socket before returning.
#[async_trait]
pub trait Server: Send + 'static {
    /// Bind the listening socket and return the port the OS assigned.
    async fn listen(&mut self) -> io::Result<u16>;

    /// Serve requests until `shutdown` fires, then drain and return.
    async fn serve(self: Box<Self>, shutdown: ShutdownGuard) -> io::Result<()>;
}

/// Creates a fresh [`Server`] for each start.
pub trait ServerFactory: Send + Sync {
    fn create(&self) -> Box<dyn Server>;
}

impl<F> ServerFactory for F
where
    F: Fn() -> Box<dyn Server> + Send + Sync,
{
    fn create(&self) -> Box<dyn Server> {
        self()
    }
}
