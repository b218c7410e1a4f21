//! HTTP middleware for request processing.
//!
//! Provides request tracing and the optional CORS policy for browser clients.

pub mod cors;
pub mod tracing;
