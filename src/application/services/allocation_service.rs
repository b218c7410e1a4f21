//! Short code allocation for new links.

use std::sync::Arc;

use crate::domain::entities::{Link, MAX_TARGET_LENGTH, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{LinkError, StoreError};
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator, validate_custom_code};
use tracing::{debug, info};

const LINKS_CREATED_METRIC: &str = "shortlink_links_created_total";
const CODE_COLLISIONS_METRIC: &str = "shortlink_code_collisions_total";

/// Service that creates links and picks their short codes.
///
/// Uniqueness rests entirely on [`LinkRepository::insert`] being atomic: a
/// conflicting insert is an ordinary outcome here, reported for custom codes
/// and retried for generated ones.
pub struct AllocationService<L, G = RandomCodeGenerator>
where
    L: LinkRepository + ?Sized,
    G: CodeGenerator,
{
    link_repository: Arc<L>,
    generator: G,
}

impl<L: LinkRepository + ?Sized> AllocationService<L> {
    /// Creates an allocation service drawing codes from an OS-seeded CSPRNG.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_generator(link_repository, RandomCodeGenerator::new())
    }
}

impl<L, G> AllocationService<L, G>
where
    L: LinkRepository + ?Sized,
    G: CodeGenerator,
{
    /// Creates an allocation service with an explicit code generator.
    pub fn with_generator(link_repository: Arc<L>, generator: G) -> Self {
        Self {
            link_repository,
            generator,
        }
    }

    /// Creates a short link for `target_url`.
    ///
    /// # Arguments
    ///
    /// - `target_url` - destination, stored trimmed
    /// - `custom_code` - requested code; `None` or blank means "generate one"
    ///
    /// # Code Selection
    ///
    /// - A custom code is trimmed, validated and inserted as-is. It is never
    ///   replaced by a generated code.
    /// - Otherwise random 8-character codes are drawn until one inserts
    ///   without conflict. There is no attempt limit.
    ///
    /// # Errors
    ///
    /// - [`LinkError::BlankTarget`] if the target is empty or whitespace
    /// - [`LinkError::TargetTooLong`] if the target exceeds 2048 characters
    /// - [`LinkError::InvalidCode`] if the custom code is malformed
    /// - [`LinkError::DuplicateCode`] if the custom code is taken
    /// - [`LinkError::Storage`] on storage failures
    pub async fn create_link(
        &self,
        target_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, LinkError> {
        let target_url = normalize_target(target_url)?;

        let link = match custom_code.map(str::trim).filter(|code| !code.is_empty()) {
            Some(code) => self.insert_custom(code, target_url).await?,
            None => self.insert_generated(target_url).await?,
        };

        info!(code = %link.code, id = link.id, "Short link created");
        Ok(link)
    }

    async fn insert_custom(&self, code: &str, target_url: &str) -> Result<Link, LinkError> {
        validate_custom_code(code)?;

        // Fast path only; the insert below is what actually guards uniqueness.
        if self.link_repository.exists(code).await? {
            return Err(LinkError::DuplicateCode(code.to_string()));
        }

        match self
            .link_repository
            .insert(NewLink::new(code, target_url))
            .await
        {
            Ok(link) => {
                metrics::counter!(LINKS_CREATED_METRIC, "kind" => "custom").increment(1);
                Ok(link)
            }
            Err(StoreError::Conflict(_)) => Err(LinkError::DuplicateCode(code.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert_generated(&self, target_url: &str) -> Result<Link, LinkError> {
        loop {
            let candidate = self.generator.generate();

            match self
                .link_repository
                .insert(NewLink::new(candidate, target_url))
                .await
            {
                Ok(link) => {
                    metrics::counter!(LINKS_CREATED_METRIC, "kind" => "generated").increment(1);
                    return Ok(link);
                }
                Err(StoreError::Conflict(code)) => {
                    debug!(code = %code, "Generated code collided, drawing another");
                    metrics::counter!(CODE_COLLISIONS_METRIC).increment(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Trims the target and enforces the non-blank and length invariants.
fn normalize_target(target_url: &str) -> Result<&str, LinkError> {
    let target_url = target_url.trim();

    if target_url.is_empty() {
        return Err(LinkError::BlankTarget);
    }

    let length = target_url.chars().count();
    if length > MAX_TARGET_LENGTH {
        return Err(LinkError::TargetTooLong {
            length,
            max: MAX_TARGET_LENGTH,
        });
    }

    Ok(target_url)
}
