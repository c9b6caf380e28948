//! External AI artifact generation.
//!
//! The generator is a capability consumed by the orchestrator. Business
//! failures come back as [`domain::OutcomeKind::Failure`]; transport
//! problems come back as [`ports::GeneratorError`] and are folded into the
//! failure path by the caller.

pub mod adapters;
pub mod domain;
pub mod ports;
