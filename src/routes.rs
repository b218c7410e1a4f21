//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}`    - Short link redirect
//! - `GET  /health`      - Storage health check
//! - `/api/*`            - Link management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single configured browser origin (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and request layer attached.
///
/// `cors_origin`, when set, is the only browser origin allowed to call the
/// API cross-site.
pub fn router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let router = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    match cors_origin {
        Some(origin) => router.layer(cors::layer(origin)),
        None => router,
    }
}

/// Wraps [`router`] so `/api/links/` and `/api/links` reach the same handler.
pub fn app_router(state: AppState, cors_origin: Option<HeaderValue>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_origin))
}
