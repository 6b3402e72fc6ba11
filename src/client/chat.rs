//! Stateless chat completions.

use reqwest::Method;

use crate::client::core::Client;
use crate::reasoning::extract_reasoning;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::Result;

impl Client {
    /// Send a stateless chat completion request.
    ///
    /// This is the simplest way to use PixiGPT — no thread management; the
    /// caller owns the conversation history.
    ///
    /// Chain-of-thought reasoning lands in `reasoning_content` on each
    /// choice. When the server delivers it embedded in `<think>` tags
    /// instead, the tags are extracted here; the dedicated field always
    /// takes precedence when both are present.
    pub async fn create_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let body = serde_json::to_value(&req)?;

        let mut resp: ChatCompletionResponse = self
            .request(Method::POST, "/chat/completions", Some(body))
            .await?;

        for choice in &mut resp.choices {
            let (content, reasoning) = extract_reasoning(&choice.message.content);
            choice.message.content = content;

            let field_present = choice
                .reasoning_content
                .as_deref()
                .is_some_and(|r| !r.is_empty());
            if !field_present && !reasoning.is_empty() {
                choice.reasoning_content = Some(reasoning);
            }
        }

        Ok(resp)
    }
}
