//! Audit sink port.

use crate::audit::domain::AuditEvent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit sink operations.
pub type AuditSinkResult<T> = Result<T, AuditSinkError>;

/// Append-only recorder of audit events.
///
/// Callers treat a returned error as something to report, never as a reason
/// to abort the operation being audited.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Appends one event.
    async fn record(&self, event: &AuditEvent) -> AuditSinkResult<()>;
}

/// Errors returned by audit sink implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditSinkError {
    /// The sink could not accept the event.
    #[error("audit sink unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditSinkError {
    /// Wraps an underlying sink failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
