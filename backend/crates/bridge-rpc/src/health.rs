use crate::RpcState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - reports the bound port
pub async fn health(State(state): State<RpcState>) -> Response {
    let health = json!({
        "status": "ok",
        "port": state.port.to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the server answering?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness() -> Response {
    // Handlers hold no external resources, so answering means ready.
    (StatusCode::OK, "Ready").into_response()
}
