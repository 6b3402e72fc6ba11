//! Assistant operations.

use reqwest::Method;
use serde_json::json;

use crate::client::core::Client;
use crate::types::{Assistant, AssistantParams, List, Thread};
use crate::Result;

fn params_body(params: &AssistantParams) -> serde_json::Value {
    let mut body = json!({
        "name": params.name,
        "instructions": params.instructions,
    });
    if let Some(tools_config) = &params.tools_config {
        body["tools_config"] = json!(tools_config);
    }
    body
}

impl Client {
    /// List all assistants.
    pub async fn list_assistants(&self) -> Result<Vec<Assistant>> {
        let list: List<Assistant> = self.request(Method::GET, "/assistants", None).await?;
        Ok(list.data)
    }

    /// Retrieve an assistant by id.
    pub async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant> {
        self.request(Method::GET, &format!("/assistants/{assistant_id}"), None)
            .await
    }

    /// Create a new assistant.
    pub async fn create_assistant(&self, params: &AssistantParams) -> Result<Assistant> {
        self.request(Method::POST, "/assistants", Some(params_body(params)))
            .await
    }

    /// Update an existing assistant.
    pub async fn update_assistant(
        &self,
        assistant_id: &str,
        params: &AssistantParams,
    ) -> Result<Assistant> {
        self.request(
            Method::PUT,
            &format!("/assistants/{assistant_id}"),
            Some(params_body(params)),
        )
        .await
    }

    /// Delete an assistant.
    pub async fn delete_assistant(&self, assistant_id: &str) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/assistants/{assistant_id}"), None)
            .await
    }

    /// List the threads used by an assistant.
    pub async fn list_assistant_threads(
        &self,
        assistant_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Thread>> {
        let path = match limit {
            Some(limit) => format!("/assistants/{assistant_id}/threads?limit={limit}"),
            None => format!("/assistants/{assistant_id}/threads"),
        };
        let list: List<Thread> = self.request(Method::GET, &path, None).await?;
        Ok(list.data)
    }
}
