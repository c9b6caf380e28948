//! Domain model for audit events.

mod event;

pub use event::{AuditEvent, AuditEventKind, ParseAuditEventKindError};
