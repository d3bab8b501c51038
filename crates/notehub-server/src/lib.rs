//! notehub-server: HTTP API server for notehub
//!
//! This crate provides:
//! - Note endpoints (upload, list, delete)
//! - Liveness and store health checks
//! - Static asset serving for the web client
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_server::{AppState, ServerConfig, app};
//!
//! let config = ServerConfig::load()?;
//! let notes = notehub_store::open_repository(&config.store).await?;
//! let router = app(AppState::new(notes, config));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::request_id::{propagate_request_id, request_id_layer};

// Re-exports for convenience
pub use config::{ConfigError, CorsOrigins, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notehub_core;
pub use notehub_store;

/// Build the router with the full middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config().cors_allowed_origins);

    routes::build_router(state)
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
