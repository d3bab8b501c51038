//! Liveness endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /`.
pub const GREETING: &str = "Hello World!";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Document store reachability: "up" or "down".
    pub store: String,
}

/// GET / - Plain-text liveness check. Never touches the store.
async fn hello() -> &'static str {
    GREETING
}

/// GET /health - Health check with store reachability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.notes().ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        store: store.to_string(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
}
