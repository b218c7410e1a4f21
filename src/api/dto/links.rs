//! DTOs for the link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, MAX_CODE_LENGTH, MAX_TARGET_LENGTH};

/// Body of `POST /api/links`.
///
/// A missing `targetUrl` deserializes to an empty string so it is reported
/// as a validation error rather than a body rejection. Length limits apply
/// to the trimmed values, the same ones the allocator stores.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(custom(function = "trimmed_target_length"))]
    pub target_url: String,

    #[validate(custom(function = "trimmed_code_length"))]
    pub custom_code: Option<String>,
}

fn trimmed_target_length(value: &str) -> Result<(), ValidationError> {
    trimmed_max_length(value, MAX_TARGET_LENGTH, "Target URL must be at most 2048 characters")
}

fn trimmed_code_length(value: &str) -> Result<(), ValidationError> {
    trimmed_max_length(value, MAX_CODE_LENGTH, "Custom code must be at most 64 characters")
}

fn trimmed_max_length(
    value: &str,
    max: usize,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::new("length").with_message(message.into()));
    }

    Ok(())
}

/// Public view of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            created_at: link.created_at,
            short_url,
        }
    }
}
