//! Conversation thread types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A conversation thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContentText {
    pub value: String,
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

/// A content block in a thread message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: MessageContentText,
}

/// A message stored on a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub thread_id: String,
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContent>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
    // Attachments produced by server-side tool execution.
    #[serde(default)]
    pub sources: Vec<MessageSource>,
    #[serde(default)]
    pub media: Vec<MessageMedia>,
    #[serde(default)]
    pub code: Vec<MessageCode>,
}

impl ThreadMessage {
    /// Concatenated text of all content blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.value.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Source attachment from tools like web search or fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSource {
    pub id: String,
    pub tool_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Media attachment from image tools or user uploads.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageMedia {
    pub id: String,
    pub source: String,
    /// `image` or `audio`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Temporary signed URL, valid for 24 hours.
    pub signed_url: String,
}

/// Code execution result attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageCode {
    pub id: String,
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub execution_time_ms: Option<u64>,
}
