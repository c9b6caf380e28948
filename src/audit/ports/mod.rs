//! Port contracts for the audit trail.

pub mod sink;

pub use sink::{AuditSink, AuditSinkError, AuditSinkResult};
