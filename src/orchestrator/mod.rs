//! Application and task orchestration.
//!
//! The [`Orchestrator`] is the only writer of applications and tasks. It
//! creates them, dispatches generation work, interprets outcomes through the
//! pure [`interpret_outcome`] policy, drives both state machines, and
//! records an audit event for every consequential step.

mod error;
mod interpretation;
mod locks;
mod service;

pub use error::{OrchestratorError, OrchestratorResult};
pub use interpretation::{Interpretation, completion_for, interpret_outcome};
pub use locks::ApplicationLocks;
pub use service::{NOT_READY_REASON, Orchestrator, OrchestratorPorts};

#[cfg(test)]
mod tests;
