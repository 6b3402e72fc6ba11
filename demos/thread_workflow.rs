//! Full thread workflow: create a thread, add a message, start a run and
//! wait for the assistant's reply.
//!
//! Usage:
//!   PIXIGPT_API_KEY=... PIXIGPT_BASE_URL=... DEFAULT_ASSISTANT_ID=... \
//!     cargo run --example thread_workflow

use pixigpt::{Client, RunParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;
    let assistant_id = std::env::var("DEFAULT_ASSISTANT_ID")?;

    let thread = client.create_thread().await?;
    println!("thread: {}", thread.id);

    let msg = client
        .create_message(&thread.id, "user", "What is the capital of France? One word.")
        .await?;
    println!("message: {}", msg.id);

    let run = client
        .create_run(&thread.id, &RunParams::new(&assistant_id))
        .await?;
    println!("run: {} ({})", run.id, run.status);

    let completed = client.wait_for_run(&thread.id, &run.id).await?;
    println!("run finished: {}", completed.status);

    for message in client.list_messages(&thread.id, Some(10)).await?.iter().rev() {
        println!("{}: {}", message.role, message.text());
    }

    client.delete_thread(&thread.id).await?;
    Ok(())
}
