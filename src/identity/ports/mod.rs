//! Port contracts for credential verification.

pub mod credentials;

pub use credentials::{CredentialError, CredentialResult, CredentialVerifier};
