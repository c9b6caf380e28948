//! Adapter implementations for the submission gateway port.

mod manual;
mod scripted;

pub use manual::{MANUAL_SUBMISSION_REASON, ManualSubmission};
pub use scripted::ScriptedSubmissionGateway;
