//! In-memory credential store for tests and local wiring.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::identity::{
    domain::{EmailAddress, IdentityDomainError, User},
    ports::{CredentialError, CredentialResult, CredentialVerifier},
};

/// Thread-safe in-memory credential store.
///
/// Secrets are never held in plain text: each account keeps a random salt
/// and the SHA-256 digest of `salt || secret`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    accounts: Arc<RwLock<HashMap<EmailAddress, StoredAccount>>>,
}

#[derive(Debug, Clone)]
struct StoredAccount {
    user: User,
    salt: String,
    digest: String,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user with the given secret.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Invalid`] for a blank secret and
    /// [`CredentialError::DuplicateEmail`] when the email is taken.
    pub fn register(&self, user: User, secret: &str) -> CredentialResult<()> {
        if secret.trim().is_empty() {
            return Err(IdentityDomainError::EmptySecret.into());
        }
        let mut accounts = self
            .accounts
            .write()
            .map_err(|err| CredentialError::backend(std::io::Error::other(err.to_string())))?;
        if accounts.contains_key(user.email()) {
            return Err(CredentialError::DuplicateEmail(user.email().clone()));
        }

        let salt = Uuid::new_v4().simple().to_string();
        let digest = digest_secret(&salt, secret);
        accounts.insert(user.email().clone(), StoredAccount { user, salt, digest });
        Ok(())
    }
}

fn digest_secret(salt: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn digests_match(left: &str, right: &str) -> bool {
    left.as_bytes().ct_eq(right.as_bytes()).unwrap_u8() == 1
}

#[async_trait]
impl CredentialVerifier for InMemoryCredentialStore {
    async fn verify(&self, email: &EmailAddress, secret: &str) -> CredentialResult<Option<User>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|err| CredentialError::backend(std::io::Error::other(err.to_string())))?;
        let matched = accounts.get(email).and_then(|account| {
            let candidate = digest_secret(&account.salt, secret);
            digests_match(&candidate, &account.digest).then(|| account.user.clone())
        });
        Ok(matched)
    }
}
