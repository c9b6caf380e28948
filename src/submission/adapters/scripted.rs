//! Scripted submission gateway for tests.

use crate::application::domain::{Application, ApplicationId};
use crate::submission::ports::{
    SubmissionError, SubmissionGateway, SubmissionReceipt, SubmissionResult,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Gateway that returns a fixed receipt and records what it was asked to
/// submit.
#[derive(Debug, Clone)]
pub struct ScriptedSubmissionGateway {
    receipt: Option<SubmissionReceipt>,
    attempts: Arc<RwLock<Vec<ApplicationId>>>,
}

impl ScriptedSubmissionGateway {
    /// Creates a gateway that accepts every submission.
    #[must_use]
    pub fn accepting() -> Self {
        Self::with_receipt(Some(SubmissionReceipt::Submitted))
    }

    /// Creates a gateway that declines with `reason`.
    #[must_use]
    pub fn declining(reason: impl Into<String>) -> Self {
        Self::with_receipt(Some(SubmissionReceipt::NotSubmitted(reason.into())))
    }

    /// Creates a gateway whose transport always fails.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::with_receipt(None)
    }

    fn with_receipt(receipt: Option<SubmissionReceipt>) -> Self {
        Self {
            receipt,
            attempts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the applications submitted so far.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] when lock acquisition fails.
    pub fn attempts(&self) -> SubmissionResult<Vec<ApplicationId>> {
        let attempts = self
            .attempts
            .read()
            .map_err(|err| SubmissionError::transport(std::io::Error::other(err.to_string())))?;
        Ok(attempts.clone())
    }
}

#[async_trait]
impl SubmissionGateway for ScriptedSubmissionGateway {
    async fn submit(&self, application: &Application) -> SubmissionResult<SubmissionReceipt> {
        self.attempts
            .write()
            .map_err(|err| SubmissionError::transport(std::io::Error::other(err.to_string())))?
            .push(application.id());
        self.receipt.clone().ok_or_else(|| {
            SubmissionError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "submission integration unreachable",
            ))
        })
    }
}
