//! Application lifecycle states and transition rules.

use super::ParseApplicationStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application lifecycle status.
///
/// Interview, offer, and rejection stages are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Created, nothing attempted yet.
    Draft,
    /// Prepared and waiting for submission.
    Ready,
    /// The user must act before the application can progress.
    PartialActionRequired,
    /// The application was submitted.
    Submitted,
    /// The application could not be submitted.
    FailedNotSubmitted,
}

impl ApplicationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::PartialActionRequired => "partial_action_required",
            Self::Submitted => "submitted",
            Self::FailedNotSubmitted => "failed_not_submitted",
        }
    }

    /// Returns whether a submission attempt may proceed from this status.
    #[must_use]
    pub const fn is_eligible_for_submission(self) -> bool {
        matches!(self, Self::Draft | Self::Ready)
    }

    /// Returns whether no automatic transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::FailedNotSubmitted)
    }

    /// Returns whether the lifecycle permits moving to `target`.
    ///
    /// `PartialActionRequired` and `FailedNotSubmitted` are reachable from
    /// every status because blocked submissions and generation outcomes
    /// apply regardless of where the application stands. `Submitted`
    /// requires an eligible source, `Ready` is only reachable from `Draft`,
    /// and nothing returns to `Draft`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        match target {
            Self::Draft => false,
            Self::Ready => matches!(self, Self::Draft),
            Self::Submitted => self.is_eligible_for_submission(),
            Self::PartialActionRequired | Self::FailedNotSubmitted => true,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ApplicationStatus {
    type Error = ParseApplicationStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "ready" => Ok(Self::Ready),
            "partial_action_required" => Ok(Self::PartialActionRequired),
            "submitted" => Ok(Self::Submitted),
            "failed_not_submitted" => Ok(Self::FailedNotSubmitted),
            _ => Err(ParseApplicationStatusError(value.to_owned())),
        }
    }
}
