//! Handler for the store health probe.

use axum::{Json, extract::State};

use crate::api::dto::ping::PingResponse;
use crate::state::AppState;

/// Reports whether the store is reachable.
///
/// # Endpoint
///
/// `GET /ping`
///
/// Always answers 200 with `{"status": "OK"}` or `{"status": "DOWN"}`.
pub async fn ping_handler(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse::from(state.link_service.ping().await))
}
