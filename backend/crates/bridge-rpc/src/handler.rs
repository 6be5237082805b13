use crate::methods::process_request;
use crate::{JsonRpcRequest, JsonRpcResponse, RpcError};

use axum::{
    Json,
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// /jsonrpc - JSON-RPC 2.0 over HTTP POST
///
/// Transport-level problems (wrong HTTP method, undecodable body) are
/// answered with 400; everything that decodes is answered with 200 and a
/// JSON-RPC result or error object.
pub async fn jsonrpc_handler(method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        return transport_error(RpcError::InvalidRequest);
    }

    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejecting undecodable JSON-RPC body: {e}");
            return transport_error(RpcError::Parse);
        }
    };

    log::debug!("JSON-RPC call: {}", request.method);

    (StatusCode::OK, Json(process_request(request))).into_response()
}

fn transport_error(error: RpcError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(JsonRpcResponse::failure(Value::Null, &error)),
    )
        .into_response()
}
