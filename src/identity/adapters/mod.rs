//! Adapter implementations for the credential verifier port.

pub mod memory;

pub use memory::InMemoryCredentialStore;
