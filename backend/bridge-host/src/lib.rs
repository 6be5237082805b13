//! Host-side entry points for the embedded JSON-RPC server.
//!
//! [`HostBridge`] is the synchronous surface a host application calls:
//! `start_server`, `stop_server` and `get_server_port`, with plain integer
//! and boolean results.

mod bridge;
pub mod cli;
pub mod console;
pub mod error;
pub mod logger;


pub use bridge::{HostBridge, NO_SERVER_PORT};
pub use error::{HostError, Result as HostResult};
