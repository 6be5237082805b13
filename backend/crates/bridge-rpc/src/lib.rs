//! Local HTTP JSON-RPC 2.0 server run under the bridge supervisor.

pub mod error;
pub mod handler;
pub mod health;
pub mod jsonrpc;
pub mod methods;
pub mod routes;
pub mod server;
pub mod state;


pub use error::RpcError;
pub use jsonrpc::{JSONRPC_VERSION, JsonRpcErrorBody, JsonRpcRequest, JsonRpcResponse};
pub use routes::build_router;
pub use server::RpcServer;
pub use state::RpcState;
