//! Port contracts for application persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the orchestrator.

pub mod repository;

pub use repository::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult};
