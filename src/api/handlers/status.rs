//! Handler for click statistics of a short link.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use validator::Validate;

use crate::api::dto::status::{StatusQuery, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a link and, on request, the clicks themselves.
///
/// # Endpoint
///
/// `GET /{code}/status?full_info=true&max_result=10&offset=1`
///
/// # Query Parameters
///
/// - `full_info` (optional, default `false`): include the click list
/// - `max_result` (required, `>= 2`): page size
/// - `offset` (required, `>= 1`): clicks to skip, newest first
///
/// # Response
///
/// ```json
/// {
///   "count": 2,
///   "clicks": [
///     { "visited": "2024-01-15T10:30:00Z", "client_data": "[127.0.0.1:50312]: curl/8.5.0" },
///     { "visited": "2024-01-15T10:29:58Z", "client_data": "[127.0.0.1:50310]: curl/8.5.0" }
///   ]
/// }
/// ```
///
/// `count` is the number of clicks on the returned page. Unknown and
/// deleted codes yield `{"count": 0}`.
///
/// # Errors
///
/// Returns 400 Bad Request if a parameter is missing, not a number or out of
/// bounds. Nothing is read from the store in that case.
pub async fn status_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Path(code) = code?;
    let Query(query) = query?;
    query.validate()?;

    let clicks = state
        .link_service
        .status(&code, query.max_result, query.offset)
        .await?;

    Ok(Json(StatusResponse::new(clicks, query.full_info)))
}
