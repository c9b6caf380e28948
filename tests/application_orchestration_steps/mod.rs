//! Step definitions for application orchestration scenarios.

mod given;
