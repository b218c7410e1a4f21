//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};

/// Maximum length of a short code, in characters.
pub const MAX_CODE_LENGTH: usize = 64;

/// Maximum length of a target URL, in characters.
pub const MAX_TARGET_LENGTH: usize = 2048;

/// A stored short link.
///
/// Links are created once through [`crate::domain::repositories::LinkRepository::insert`]
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target_url,
            created_at,
        }
    }
}

/// Input data for inserting a new link.
///
/// Both fields are expected to be trimmed and validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}
