//! Asynchronous run types.

use serde::{Deserialize, Serialize};

use super::thread::ThreadMessage;

/// Remote-reported run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
}

impl RunStatus {
    /// A terminal status will never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// An asynchronous run on a thread. Owned by the server; the client holds a
/// possibly-stale copy refreshed on each poll.
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub thread_id: String,
    pub assistant_id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub model: String,
    /// Populated once the run completes.
    #[serde(default)]
    pub message: Option<ThreadMessage>,
}

/// Parameters for starting a run. Unset optionals defer to server defaults.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub assistant_id: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub enable_thinking: bool,
}

impl RunParams {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            temperature: None,
            max_tokens: None,
            enable_thinking: true,
        }
    }
}
