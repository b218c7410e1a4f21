//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /links` - List every link, newest first
/// - `POST /links` - Create a link with a generated or custom code
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/links", get(list_links_handler).post(create_link_handler))
}
