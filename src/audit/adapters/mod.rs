//! Adapter implementations for the audit sink port.

pub mod memory;

mod log_sink;

pub use log_sink::TracingAuditSink;
pub use memory::InMemoryAuditSink;
