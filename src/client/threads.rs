//! Thread operations.

use reqwest::Method;
use serde_json::json;

use crate::client::core::Client;
use crate::types::{List, Thread};
use crate::Result;

impl Client {
    /// Create a new conversation thread.
    pub async fn create_thread(&self) -> Result<Thread> {
        self.request(Method::POST, "/threads", Some(json!({}))).await
    }

    /// Retrieve a thread by id.
    pub async fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        self.request(Method::GET, &format!("/threads/{thread_id}"), None)
            .await
    }

    /// List all threads for the authenticated user.
    pub async fn list_threads(&self) -> Result<Vec<Thread>> {
        let list: List<Thread> = self.request(Method::GET, "/threads", None).await?;
        Ok(list.data)
    }

    /// Delete a thread by id.
    pub async fn delete_thread(&self, thread_id: &str) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/threads/{thread_id}"), None)
            .await
    }
}
