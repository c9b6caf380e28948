//! Adapter implementations for application ports.

pub mod memory;

pub use memory::InMemoryApplicationRepository;
