//! Submission of applications to an employer.
//!
//! No automatic integration exists yet: the default
//! [`adapters::ManualSubmission`] gateway always reports that the user has
//! to apply by hand.

pub mod adapters;
pub mod ports;
