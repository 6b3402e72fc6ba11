//! Vision operations: image analysis, tagging, OCR and video analysis.

use reqwest::Method;

use crate::client::core::Client;
use crate::types::{
    VisionAnalyzeRequest, VisionAnalyzeResponse, VisionOcrRequest, VisionOcrResponse,
    VisionTagsRequest, VisionTagsResponse, VisionVideoRequest, VisionVideoResponse,
};
use crate::Result;

impl Client {
    /// Analyze an image and return a detailed description.
    ///
    /// The server downloads and preprocesses the image (resize, JPEG
    /// conversion) before inference.
    pub async fn analyze_image(&self, req: VisionAnalyzeRequest) -> Result<VisionAnalyzeResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/vision/analyze", Some(body)).await
    }

    /// Generate comma-separated tags for an image, suitable for
    /// categorization and search.
    pub async fn analyze_image_for_tags(
        &self,
        req: VisionTagsRequest,
    ) -> Result<VisionTagsResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/vision/tags", Some(body)).await
    }

    /// Perform OCR on an image, preserving structure (tables, lists,
    /// hierarchy).
    pub async fn extract_text(&self, req: VisionOcrRequest) -> Result<VisionOcrResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/vision/ocr", Some(body)).await
    }

    /// Analyze a video and return a description of its content.
    pub async fn analyze_video(&self, req: VisionVideoRequest) -> Result<VisionVideoResponse> {
        let body = serde_json::to_value(&req)?;
        self.request(Method::POST, "/vision/video", Some(body)).await
    }
}
