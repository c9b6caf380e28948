//! Bounded match score.

use super::ApplicationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fit between a user and a job, from 0 to 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    /// Largest accepted score.
    pub const MAX: u8 = 100;

    /// Creates a validated score.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::MatchScoreOutOfRange`] when the
    /// value is negative or above 100.
    pub fn new(value: i64) -> Result<Self, ApplicationDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|score| *score <= Self::MAX)
            .map(Self)
            .ok_or(ApplicationDomainError::MatchScoreOutOfRange(value))
    }

    /// Returns the score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MatchScore {
    type Error = ApplicationDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
