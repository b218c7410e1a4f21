//! CORS policy for the browser front end.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Allows a single origin to call the API from a browser.
///
/// Only the methods and headers the link endpoints need are exposed.
pub fn layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
