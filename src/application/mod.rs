//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocation_service::AllocationService`] - Link creation and code allocation
//! - [`services::resolution_service::ResolutionService`] - Code lookup, listing and short URLs

pub mod services;
