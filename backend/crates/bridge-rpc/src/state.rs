/// Shared state for request handlers
#[derive(Debug, Clone)]
pub struct RpcState {
    /// Port the server is bound to
    pub port: u16,
}

impl RpcState {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}
