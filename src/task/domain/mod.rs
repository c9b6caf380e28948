//! Domain model for generation tasks.
//!
//! The task aggregate enforces its own lifecycle: completion timestamps,
//! result payloads, and error details can only appear together with the
//! terminal status they belong to.

mod error;
mod ids;
mod kind;
mod result;
mod status;
mod task;

pub use error::{ParseTaskStatusError, ParseTaskTypeError, TaskDomainError};
pub use ids::TaskId;
pub use kind::TaskType;
pub use result::{TaskCompletion, TaskResult};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
