use std::io;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("Failed to bind server socket: {source} {location}")]
    BindFailure {
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to create server runtime: {source} {location}")]
    RuntimeInit {
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Server did not drain within {timeout_ms}ms, teardown was forced {location}")]
    ShutdownTimeout {
        timeout_ms: u64,
        location: ErrorLocation,
    },
}

impl SupervisorError {
    /// Whether the supervisor completed the operation anyway.
    ///
    /// A forced teardown still leaves the supervisor idle with the socket
    /// released, so callers may treat it as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::ShutdownTimeout { .. })
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::BindFailure { .. } => {
                "The operating system refused to open a listening socket. \
                   Check the configured host and port, or free an ephemeral port."
            }
            Self::RuntimeInit { .. } => {
                "Background threads could not be created. \
                   The process may be out of resources."
            }
            Self::ShutdownTimeout { .. } => {
                "The server was stopped forcibly. \
                   In-flight requests may have been cut off."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SupervisorError>;
