//! Handlers for link creation and listing.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com/docs",
///   "customCode": "docs"   // optional
/// }
/// ```
///
/// A blank or absent `customCode` asks the server to generate an 8-character
/// code.
///
/// # Errors
///
/// - **400 Bad Request**: blank or overlong target, malformed custom code
/// - **409 Conflict**: custom code already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .allocation_service
        .create_link(&payload.target_url, payload.custom_code.as_deref())
        .await?;

    let short_url = state.resolution_service.short_url(&link.code);

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.resolution_service.list_links().await?;

    Ok(Json(
        links
            .into_iter()
            .map(|(link, short_url)| LinkResponse::new(link, short_url))
            .collect(),
    ))
}
