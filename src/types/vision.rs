//! Vision and moderation types.

use serde::{Deserialize, Serialize};

use super::chat::Usage;

/// Request to analyze an image.
#[derive(Debug, Clone, Serialize)]
pub struct VisionAnalyzeRequest {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionAnalyzeResponse {
    pub result: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Request to generate comma-separated tags for an image.
#[derive(Debug, Clone, Serialize)]
pub struct VisionTagsRequest {
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionTagsResponse {
    pub result: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Request to extract text from an image.
#[derive(Debug, Clone, Serialize)]
pub struct VisionOcrRequest {
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionOcrResponse {
    pub result: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Request to analyze a video (must be under 10MB server-side).
#[derive(Debug, Clone, Serialize)]
pub struct VisionVideoRequest {
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionVideoResponse {
    pub result: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Request to moderate text.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationTextRequest {
    pub prompt: String,
}

/// Request to moderate image or video content.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationMediaRequest {
    pub media_url: String,
    pub is_video: bool,
}

/// Moderation verdict: category with a confidence score in `0.0..=1.0`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationResponse {
    pub category: String,
    pub score: f64,
    #[serde(default)]
    pub usage: Usage,
}
