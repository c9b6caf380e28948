//! Credential verifier port.

use crate::identity::domain::{EmailAddress, IdentityDomainError, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential verification.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Authenticates a user by email and secret.
///
/// A wrong email or secret is not an error: implementations return
/// `Ok(None)`. Errors are reserved for the verifier itself being
/// unavailable.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the secret for `email`, returning the matching identity.
    async fn verify(&self, email: &EmailAddress, secret: &str) -> CredentialResult<Option<User>>;
}

/// Errors returned by credential verifier implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// The registration input failed validation.
    #[error(transparent)]
    Invalid(#[from] IdentityDomainError),

    /// An account with the same email is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// Backend failure while reading credentials.
    #[error("credential backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
