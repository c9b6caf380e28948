//! User identity and credential verification.
//!
//! Credentials are stored and checked outside the orchestration core. The
//! core only consumes the [`ports::CredentialVerifier`] capability and the
//! [`domain::User`] identity it yields.

pub mod adapters;
pub mod domain;
pub mod ports;
