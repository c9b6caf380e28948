//! Port contracts for application submission.

pub mod gateway;

pub use gateway::{SubmissionError, SubmissionGateway, SubmissionReceipt, SubmissionResult};
