//! Domain model for generation outcomes.

mod outcome;

pub use outcome::{GenerationOutcome, OutcomeKind};
