//! Append-only audit trail.
//!
//! Every consequential orchestration step produces an [`domain::AuditEvent`]
//! that is handed to an injected [`ports::AuditSink`]. Audit is
//! observability: a failing sink never blocks the state change it
//! describes.

pub mod adapters;
pub mod domain;
pub mod ports;
