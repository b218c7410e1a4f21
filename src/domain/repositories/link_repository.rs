//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// The store owns every persisted [`Link`] and is the single authority on code
/// uniqueness: [`LinkRepository::insert`] must be atomic with respect to the
/// uniqueness of `code`, so that two concurrent inserts of the same code can
/// never both succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns `true` if a link with exactly this code is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Atomically inserts a new link and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the code is already taken at the
    /// moment of insertion. Nothing is written in that case.
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Lists every link, most recently created first.
    ///
    /// Links with identical timestamps are ordered by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn list_recent(&self) -> Result<Vec<Link>, StoreError>;

    /// Verifies that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
