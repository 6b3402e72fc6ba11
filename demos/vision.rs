//! Vision demo: analysis, tagging and OCR on an image URL.
//!
//! Usage:
//!   PIXIGPT_API_KEY=... PIXIGPT_BASE_URL=... \
//!     cargo run --example vision -- https://example.com/image.jpg

use pixigpt::types::{VisionAnalyzeRequest, VisionOcrRequest, VisionTagsRequest};
use pixigpt::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let image_url = std::env::args()
        .nth(1)
        .ok_or("usage: vision <image-url>")?;
    let client = Client::from_env()?;

    let analysis = client
        .analyze_image(VisionAnalyzeRequest {
            image_url: image_url.clone(),
            user_prompt: Some("Describe this image in detail.".into()),
        })
        .await?;
    println!("--- analysis ---\n{}\n", analysis.result);

    let tags = client
        .analyze_image_for_tags(VisionTagsRequest {
            image_url: image_url.clone(),
        })
        .await?;
    println!("--- tags ---\n{}\n", tags.result);

    let ocr = client
        .extract_text(VisionOcrRequest { image_url })
        .await?;
    println!("--- ocr ---\n{}", ocr.result);

    Ok(())
}
