//! JSON-RPC error types
//!
//! Each variant maps to a standard JSON-RPC 2.0 error code.

use thiserror::Error;

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RpcError {
    /// Body is not valid JSON or not shaped like a request (-32700)
    #[error("Parse error")]
    Parse,

    /// Not a JSON-RPC 2.0 request (-32600)
    #[error("Invalid Request")]
    InvalidRequest,

    /// Unknown method name (-32601)
    #[error("Method not found")]
    MethodNotFound,

    /// Params missing or of the wrong shape (-32602)
    #[error("{message}")]
    InvalidParams { message: String },
}

impl RpcError {
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        RpcError::InvalidParams {
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            RpcError::Parse => PARSE_ERROR,
            RpcError::InvalidRequest => INVALID_REQUEST,
            RpcError::MethodNotFound => METHOD_NOT_FOUND,
            RpcError::InvalidParams { .. } => INVALID_PARAMS,
        }
    }
}
