//! Content moderation operations.

use reqwest::Method;

use crate::client::core::Client;
use crate::types::{ModerationMediaRequest, ModerationResponse, ModerationTextRequest};
use crate::Result;

impl Client {
    /// Classify text content into a moderation category with a confidence
    /// score.
    pub async fn moderate_text(&self, req: ModerationTextRequest) -> Result<ModerationResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/moderations", Some(body)).await
    }

    /// Classify image or video content, same categories as text moderation
    /// but with visual assessment.
    pub async fn moderate_media(&self, req: ModerationMediaRequest) -> Result<ModerationResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/moderations/media", Some(body))
            .await
    }
}
