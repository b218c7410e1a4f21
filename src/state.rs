//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AllocationService, ResolutionService};
use crate::domain::repositories::LinkRepository;

/// Services shared by every request handler.
///
/// Both services wrap the same repository, chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<AllocationService<dyn LinkRepository>>,
    pub resolution_service: Arc<ResolutionService<dyn LinkRepository>>,
}

impl AppState {
    /// Wires both services on top of `link_repository`.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: &str) -> Self {
        let allocation_service = Arc::new(AllocationService::new(link_repository.clone()));
        let resolution_service = Arc::new(ResolutionService::new(link_repository, base_url));

        Self {
            allocation_service,
            resolution_service,
        }
    }
}
