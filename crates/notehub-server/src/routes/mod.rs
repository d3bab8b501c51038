//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Paths no route matches fall through to the static asset directory.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config().static_dir);

    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .fallback_service(assets)
        .with_state(state)
}
