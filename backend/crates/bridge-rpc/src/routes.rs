use crate::{RpcState, handler, health};

use axum::{
    Router,
    http::{Method, header},
    routing::{any, get},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the JSON-RPC router
pub fn build_router(state: RpcState) -> Router {
    Router::new()
        // JSON-RPC endpoint (method checked in the handler)
        .route("/jsonrpc", any(handler::jsonrpc_handler))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        // CORS for browser-hosted callers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
