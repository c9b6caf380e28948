//! Domain model for job applications.
//!
//! The application aggregate owns the submission timestamp invariant: a
//! `submitted_at` value exists exactly while the status is `Submitted`.

mod application;
mod error;
mod ids;
mod score;
mod status;

pub use application::{Application, PersistedApplicationData};
pub use error::{ApplicationDomainError, ParseApplicationStatusError};
pub use ids::{ApplicationId, JobId};
pub use score::MatchScore;
pub use status::ApplicationStatus;
