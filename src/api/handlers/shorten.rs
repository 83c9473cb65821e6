//! Handlers for link shortening endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{
    BatchShortenRequest, BatchShortenResponse, ShortenRequest, UrlResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "http://localhost:3000/api/v1/q8Zk3mWx0aLp" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or an empty URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = state.link_service.shorten(&payload.url).await?;

    Ok(Json(UrlResponse { url }))
}

/// Creates short URLs for several long URLs, preserving order.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Batch Processing
///
/// All-or-nothing: either every URL gets a short link or none is stored.
///
/// # Request Body
///
/// ```json
/// { "links": [{ "url": "https://a.example" }, { "url": "https://b.example" }] }
/// ```
///
/// # Response
///
/// ```json
/// { "links": [{ "url": "http://localhost:3000/api/v1/..." }, { "url": "..." }] }
/// ```
pub async fn batch_shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchShortenRequest>, JsonRejection>,
) -> Result<Json<BatchShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let urls: Vec<String> = payload.links.into_iter().map(|item| item.url).collect();
    let short_urls = state.link_service.shorten_batch(&urls).await?;

    Ok(Json(BatchShortenResponse {
        links: short_urls
            .into_iter()
            .map(|url| UrlResponse { url })
            .collect(),
    }))
}
