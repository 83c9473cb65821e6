//! API route configuration.

use crate::api::handlers::{
    batch_shorten_handler, delete_link_handler, ping_handler, resolve_handler, shorten_handler,
    status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All link endpoints, relative to the configured API prefix.
///
/// # Endpoints
///
/// - `POST   /`              - Shorten one URL
/// - `POST   /shorten`       - Shorten a batch of URLs
/// - `GET    /ping`          - Store health probe
/// - `GET    /{code}`        - Resolve a short code and record a click
/// - `DELETE /{code}`        - Soft-delete a link
/// - `GET    /{code}/status` - Click statistics
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/shorten", post(batch_shorten_handler))
        .route("/ping", get(ping_handler))
        .route("/{code}", get(resolve_handler).delete(delete_link_handler))
        .route("/{code}/status", get(status_handler))
}
