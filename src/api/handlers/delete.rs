//! Handler for link deletion.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Response
///
/// 204 No Content, also for unknown or already deleted codes.
pub async fn delete_link_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(code) = code?;
    state.link_service.remove(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
