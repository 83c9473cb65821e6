//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `{api_prefix}/*` - Link API, see [`crate::api::routes::link_routes`]
//! - anything else    - 404 with the JSON error body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing slash normalization has to run before routing, so it wraps the
//! finished router, see [`normalize_trailing_slash`].

use crate::api;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `api_prefix` - path the link API is mounted under; empty mounts it at
///   the root
pub fn app_router(state: AppState, api_prefix: &str) -> Router {
    let api_prefix = api_prefix.trim_end_matches('/');

    let router = if api_prefix.is_empty() {
        api::routes::link_routes()
    } else {
        Router::new().nest(api_prefix, api::routes::link_routes())
    };

    router
        .fallback(route_not_found)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router so that `/api/v1/` is routed like `/api/v1`.
pub fn normalize_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found", json!({}))
}
