//! CORS layer construction.

use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsOrigins;

/// Build CORS layer from configuration.
pub fn build_cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => CorsLayer::new()
            .allow_origin(list.clone())
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
