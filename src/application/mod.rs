//! Job application tracking.
//!
//! An [`domain::Application`] is one user's pursuit of one job. Its status
//! is driven exclusively by the orchestrator in response to submission
//! attempts and generation outcomes. The module follows the same layout as
//! the other contexts:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
