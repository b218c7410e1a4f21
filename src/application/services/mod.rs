//! Business logic services for the application layer.

pub mod allocation_service;
pub mod resolution_service;

pub use allocation_service::AllocationService;
pub use resolution_service::ResolutionService;
