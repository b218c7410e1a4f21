//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// Responds with **302 Found** and a `Location` header carrying the stored
/// target. Codes are matched case-sensitively.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.resolution_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.target_url).map_err(|_| {
        AppError::internal(
            "Stored target URL cannot be used as a redirect location",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
