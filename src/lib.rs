//! Jobtrack: job application and AI task orchestration.
//!
//! This crate tracks job applications through their lifecycle, dispatches
//! artifact-generation work (cover letters, resumes, fit scores, outreach
//! emails) to an external generator, interprets the outcomes into state
//! changes, and records an audit trail of every consequential step.
//!
//! # Architecture
//!
//! Jobtrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   scripted collaborators, tracing sinks)
//!
//! # Modules
//!
//! - [`application`]: Application aggregate and its status lifecycle
//! - [`task`]: AI task aggregate and its status lifecycle
//! - [`generation`]: Artifact generator port and outcomes
//! - [`submission`]: Submission gateway port
//! - [`identity`]: Users and credential verification
//! - [`audit`]: Audit events and sinks
//! - [`orchestrator`]: The service coordinating all of the above
//! - [`config`]: Runtime settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod application;
pub mod audit;
pub mod config;
pub mod generation;
pub mod identity;
pub mod orchestrator;
pub mod submission;
pub mod task;
pub mod telemetry;
