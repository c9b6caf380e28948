//! Task result payloads and completion records.

use super::TaskStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content produced by a successful or partial generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "body", rename_all = "snake_case")]
pub enum TaskResult {
    /// Plain text, such as a letter body.
    Text(String),
    /// Structured JSON, such as a score breakdown.
    Structured(Value),
}

impl TaskResult {
    /// Classifies raw generator content.
    ///
    /// JSON objects and arrays become [`TaskResult::Structured`]; anything
    /// else, including bare JSON scalars, is kept verbatim as text.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        let raw = content.into();
        match serde_json::from_str::<Value>(&raw) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => Self::Structured(value),
            _ => Self::Text(raw),
        }
    }
}

/// How a running task finished.
///
/// Each variant carries only what its terminal status may hold, so a
/// completed task cannot pair an error detail with a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCompletion {
    /// Generation succeeded.
    Success(Option<TaskResult>),
    /// Generation produced an incomplete result.
    Partial(Option<TaskResult>),
    /// Generation failed with the given detail.
    Failed(String),
}

impl TaskCompletion {
    /// Returns the terminal status this completion produces.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self {
            Self::Success(_) => TaskStatus::Success,
            Self::Partial(_) => TaskStatus::Partial,
            Self::Failed(_) => TaskStatus::Failed,
        }
    }
}
