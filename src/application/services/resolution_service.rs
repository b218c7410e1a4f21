//! Short code resolution and short URL composition.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{LinkError, StoreError};
use tracing::debug;

/// Path segment placed between the base URL and the code.
pub const REDIRECT_PATH: &str = "/r/";

/// Service for looking up links and building their public URLs.
pub struct ResolutionService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> ResolutionService<L> {
    /// Creates a new resolution service.
    ///
    /// Trailing slashes are stripped from `base_url` so that short URLs never
    /// contain a double slash.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
        }
    }

    /// Retrieves the link stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link has this code.
    /// Returns [`LinkError::Storage`] on storage failures.
    pub async fn resolve(&self, code: &str) -> Result<Link, LinkError> {
        match self.link_repository.find_by_code(code).await? {
            Some(link) => Ok(link),
            None => {
                debug!(code, "Short code not found");
                Err(LinkError::NotFound(code.to_string()))
            }
        }
    }

    /// Builds the public short URL for `code`, e.g. `http://localhost:8080/r/abc123`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}{}", self.base_url, REDIRECT_PATH, code)
    }

    /// Lists every link, most recent first, paired with its short URL.
    pub async fn list_links(&self) -> Result<Vec<(Link, String)>, LinkError> {
        let links = self.link_repository.list_recent().await?;

        Ok(links
            .into_iter()
            .map(|link| {
                let short_url = self.short_url(&link.code);
                (link, short_url)
            })
            .collect())
    }

    /// Checks that the underlying store is reachable.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.link_repository.ping().await
    }
}
