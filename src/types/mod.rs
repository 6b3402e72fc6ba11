//! Request/response data model for the PixiGPT API.

pub mod assistant;
pub mod chat;
pub mod run;
pub mod thread;
pub mod vision;

pub use assistant::{Assistant, AssistantParams};
pub use chat::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, Message, Tool, ToolCall,
    ToolCallFunction, Usage,
};
pub use run::{Run, RunParams, RunStatus};
pub use thread::{
    MessageCode, MessageContent, MessageContentText, MessageMedia, MessageSource, Thread,
    ThreadMessage,
};
pub use vision::{
    ModerationMediaRequest, ModerationResponse, ModerationTextRequest, VisionAnalyzeRequest,
    VisionAnalyzeResponse, VisionOcrRequest, VisionOcrResponse, VisionTagsRequest,
    VisionTagsResponse, VisionVideoRequest, VisionVideoResponse,
};

use serde::Deserialize;

/// Paginated list envelope shared by the collection endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct List<T> {
    #[allow(dead_code)]
    #[serde(default)]
    pub object: Option<String>,
    pub data: Vec<T>,
    #[allow(dead_code)]
    #[serde(default)]
    pub has_more: bool,
}
