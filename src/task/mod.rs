//! AI-assisted generation tasks.
//!
//! A [`domain::Task`] is one unit of generation work (cover letter, résumé,
//! fit score, outreach email) tied to an application. Tasks move from
//! `Pending` to `Running` to exactly one terminal status and never leave
//! it; a retry is a new task. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
