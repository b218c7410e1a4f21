//! Error types shared across the crate.
//!
//! - [`StoreError`] - failures reported by a [`crate::domain::repositories::LinkRepository`]
//! - [`LinkError`] - outcomes of the allocation and resolution services
//! - [`AppError`] - HTTP-facing error rendered as a JSON envelope

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors reported by link storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The code is already taken. Nothing was written.
    #[error("short code already exists: {0}")]
    Conflict(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Outcomes of link creation and resolution that are reported to the caller.
///
/// A [`StoreError::Conflict`] raised while inserting a generated code never
/// shows up here; the allocator retries with a fresh code instead.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("target URL must not be blank")]
    BlankTarget,

    #[error("target URL is {length} characters long, the limit is {max}")]
    TargetTooLong { length: usize, max: usize },

    #[error("invalid short code: {0}")]
    InvalidCode(String),

    #[error("short code is already in use: {0}")]
    DuplicateCode(String),

    #[error("short link not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::BlankTarget => {
                AppError::bad_request("Target URL must not be blank", json!({}))
            }
            LinkError::TargetTooLong { length, max } => AppError::bad_request(
                "Target URL is too long",
                json!({ "length": length, "max": max }),
            ),
            LinkError::InvalidCode(reason) => {
                AppError::bad_request("Invalid short code", json!({ "reason": reason }))
            }
            LinkError::DuplicateCode(code) => {
                AppError::conflict("Short code is already in use", json!({ "code": code }))
            }
            LinkError::NotFound(code) => {
                AppError::not_found("Short link not found", json!({ "code": code }))
            }
            LinkError::Storage(err) => {
                tracing::error!(error = %err, "Storage failure");
                AppError::internal("Storage error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_code_maps_to_conflict() {
        let err: AppError = LinkError::DuplicateCode("taken".to_string()).into();

        assert_eq!(err.status(), StatusCode::CONFLICT);
        let info = err.to_error_info();
        assert_eq!(info.code, "conflict");
        assert_eq!(info.details["code"], "taken");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = LinkError::NotFound("nope".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_kinds_map_to_400() {
        let blank: AppError = LinkError::BlankTarget.into();
        let invalid: AppError = LinkError::InvalidCode("contains '/'".to_string()).into();
        let too_long: AppError = LinkError::TargetTooLong {
            length: 3000,
            max: 2048,
        }
        .into();

        for err in [blank, invalid, too_long] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_error_info().code, "validation_error");
        }
    }

    #[test]
    fn test_storage_failure_hides_details() {
        let err: AppError =
            LinkError::Storage(StoreError::Backend("connection refused".to_string())).into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("connection refused"));
    }
}
