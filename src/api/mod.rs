//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses according
//! to the public JSON contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and CORS layers
//! - [`routes`] - Route configuration for the `/api` prefix

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
