//! Authenticated user identity.

use super::{EmailAddress, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// The identity never carries credential material; secrets stay inside the
/// credential verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    display_name: Option<String>,
}

impl User {
    /// Creates a user with a fresh identifier.
    #[must_use]
    pub fn new(email: EmailAddress) -> Self {
        Self::from_parts(UserId::new(), email)
    }

    /// Creates a user from an existing identifier and email.
    #[must_use]
    pub const fn from_parts(id: UserId, email: EmailAddress) -> Self {
        Self {
            id,
            email,
            display_name: None,
        }
    }

    /// Sets the display name. Blank names are ignored.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        let name = display_name.into().trim().to_owned();
        self.display_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the normalized email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}
