//! Operation domain types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an asynchronous operation
///
/// The service reports status as an upper-case string. Values outside the
/// known set are kept verbatim in `Other` so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    Completed,
    Failed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Other(s) => s,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PENDING" => TaskStatus::Pending,
            "COMPLETED" => TaskStatus::Completed,
            "FAILED" => TaskStatus::Failed,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        TaskStatus::from(s.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an operation as returned by the status endpoint
///
/// A `COMPLETED` operation is expected to carry `result`, a `FAILED` one
/// `error`. The type does not enforce this; the suite asserts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationStatus {
    #[schemars(with = "String")]
    pub status: TaskStatus,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OperationStatus {
    /// Whether the operation has left `initial`
    pub fn has_settled_from(&self, initial: &TaskStatus) -> bool {
        &self.status != initial
    }
}
