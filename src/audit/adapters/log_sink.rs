//! Audit sink that writes events to the `tracing` pipeline.

use async_trait::async_trait;
use tracing::info;

use crate::audit::{
    domain::AuditEvent,
    ports::{AuditSink, AuditSinkResult},
};

/// Emits each audit event as an `info` record under `jobtrack::audit`.
///
/// Where the events end up is decided by the subscriber installed at
/// startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: &AuditEvent) -> AuditSinkResult<()> {
        info!(
            target: "jobtrack::audit",
            kind = event.kind().as_str(),
            actor = event.actor(),
            detail = event.detail().unwrap_or_default(),
            occurred_at = %event.occurred_at(),
            "audit event"
        );
        Ok(())
    }
}
