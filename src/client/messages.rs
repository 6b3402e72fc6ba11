//! Thread message operations.

use reqwest::Method;
use serde_json::json;

use crate::client::core::Client;
use crate::types::{List, ThreadMessage};
use crate::Result;

const DEFAULT_LIST_LIMIT: u32 = 20;

impl Client {
    /// Add a message to a thread.
    pub async fn create_message(
        &self,
        thread_id: &str,
        role: &str,
        content: &str,
    ) -> Result<ThreadMessage> {
        let body = json!({
            "role": role,
            "content": content,
        });
        self.request(
            Method::POST,
            &format!("/threads/{thread_id}/messages"),
            Some(body),
        )
        .await
    }

    /// Retrieve messages from a thread, newest first.
    pub async fn list_messages(
        &self,
        thread_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ThreadMessage>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let list: List<ThreadMessage> = self
            .request(
                Method::GET,
                &format!("/threads/{thread_id}/messages?limit={limit}"),
                None,
            )
            .await?;
        Ok(list.data)
    }
}
