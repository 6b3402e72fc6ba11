//! Stateless chat completion demo.
//!
//! Usage:
//!   PIXIGPT_API_KEY=... PIXIGPT_BASE_URL=... DEFAULT_ASSISTANT_ID=... \
//!     cargo run --example chat

use pixigpt::{ChatCompletionRequest, Client, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;
    let assistant_id = std::env::var("DEFAULT_ASSISTANT_ID")?;

    let resp = client
        .create_chat_completion(ChatCompletionRequest {
            assistant_id: Some(assistant_id),
            messages: vec![Message::user("Explain what a conversation thread is, briefly.")],
            temperature: Some(0.7),
            max_tokens: Some(500),
            ..Default::default()
        })
        .await?;

    let choice = &resp.choices[0];
    if let Some(reasoning) = choice.reasoning_content.as_deref() {
        println!("--- reasoning ---\n{reasoning}\n");
    }
    println!("{}", choice.message.content);
    println!(
        "\ntokens: {} in + {} out = {} total",
        resp.usage.prompt_tokens, resp.usage.completion_tokens, resp.usage.total_tokens
    );

    Ok(())
}
