//! Default gateway used while no integration is configured.

use crate::application::domain::Application;
use crate::submission::ports::{SubmissionGateway, SubmissionReceipt, SubmissionResult};
use async_trait::async_trait;

/// Reason reported when the user must submit by hand.
pub const MANUAL_SUBMISSION_REASON: &str = "Manual submission required";

/// Gateway that never submits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualSubmission;

#[async_trait]
impl SubmissionGateway for ManualSubmission {
    async fn submit(&self, _application: &Application) -> SubmissionResult<SubmissionReceipt> {
        Ok(SubmissionReceipt::NotSubmitted(
            MANUAL_SUBMISSION_REASON.to_owned(),
        ))
    }
}
