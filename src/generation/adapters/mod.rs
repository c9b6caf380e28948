//! Adapter implementations for the artifact generator port.

mod scripted;

pub use scripted::{ScriptedArtifactGenerator, ScriptedResponse};
