//! Kinds of artifact a task can generate.

use super::ParseTaskTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact produced by a generation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Cover letter tailored to the job.
    CoverLetter,
    /// Résumé tailored to the job.
    Resume,
    /// Fit score between the user and the job.
    FitScore,
    /// Outreach email to a recruiter or hiring manager.
    OutreachEmail,
}

impl TaskType {
    /// Every task type, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::CoverLetter,
        Self::Resume,
        Self::FitScore,
        Self::OutreachEmail,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoverLetter => "cover_letter",
            Self::Resume => "resume",
            Self::FitScore => "fit_score",
            Self::OutreachEmail => "outreach_email",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cover_letter" => Ok(Self::CoverLetter),
            "resume" => Ok(Self::Resume),
            "fit_score" => Ok(Self::FitScore),
            "outreach_email" => Ok(Self::OutreachEmail),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}
