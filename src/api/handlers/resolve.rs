//! Handler for short code resolution.

use axum::{
    Json,
    extract::{ConnectInfo, Path, State, rejection::PathRejection},
    http::{HeaderMap, header},
};
use std::net::SocketAddr;

use crate::api::dto::shorten::UrlResponse;
use crate::domain::entities::ClientData;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short code and records a click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `{ "url": "..." }` on a hit, `null` when the code is unknown or deleted.
/// Only hits are recorded, with the peer address and `User-Agent` header.
pub async fn resolve_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Json<Option<UrlResponse>>, AppError> {
    let Path(code) = code?;
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    let client = ClientData::from_peer(addr, user_agent);

    let url = state.link_service.resolve(&code, &client).await?;

    Ok(Json(url.map(|url| UrlResponse { url })))
}
