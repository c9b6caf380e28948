//! Port contracts for artifact generation.

pub mod generator;

pub use generator::{ArtifactGenerator, GeneratorError, GeneratorResult};
