//! In-memory audit sink for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::{AuditEvent, AuditEventKind},
    ports::{AuditSink, AuditSinkError, AuditSinkResult},
};

/// Thread-safe audit sink that keeps events in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    events: Arc<RwLock<Vec<AuditEvent>>>,
}

impl InMemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events.
    ///
    /// # Errors
    ///
    /// Returns [`AuditSinkError::Unavailable`] when lock acquisition fails.
    pub fn events(&self) -> AuditSinkResult<Vec<AuditEvent>> {
        let events = self
            .events
            .read()
            .map_err(|err| AuditSinkError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(events.clone())
    }

    /// Returns recorded events of one kind, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditSinkError::Unavailable`] when lock acquisition fails.
    pub fn events_of_kind(&self, kind: AuditEventKind) -> AuditSinkResult<Vec<AuditEvent>> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|event| event.kind() == kind)
            .collect())
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn record(&self, event: &AuditEvent) -> AuditSinkResult<()> {
        let mut events = self
            .events
            .write()
            .map_err(|err| AuditSinkError::unavailable(std::io::Error::other(err.to_string())))?;
        events.push(event.clone());
        Ok(())
    }
}
