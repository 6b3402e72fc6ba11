//! # pixigpt
//!
//! Production-grade Rust client for the PixiGPT API: stateless chat
//! completions plus stateful conversation threads processed asynchronously
//! by server-side runs.
//!
//! ## Overview
//!
//! Every outbound call funnels through a single request executor that
//! applies authentication, connection pooling, exponential-backoff retries
//! and error classification. On top of that, [`Client::wait_for_run`] turns
//! the service's asynchronous run model into a blocking wait with
//! cooperative cancellation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pixigpt::{ChatCompletionRequest, Client, Message};
//!
//! #[tokio::main]
//! async fn main() -> pixigpt::Result<()> {
//!     let client = Client::new("your-api-key", "https://api.pixigpt.com/v1")?;
//!
//!     let resp = client
//!         .create_chat_completion(ChatCompletionRequest {
//!             assistant_id: Some("e306844d-be73-4cca-ad29-e1255b97b2aa".into()),
//!             messages: vec![Message::user("Hello!")],
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("{}", resp.choices[0].message.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and per-resource operations |
//! | [`transport`] | Pooled HTTP transport (single-attempt execution) |
//! | [`types`] | Request/response data model |
//! | [`reasoning`] | Chain-of-thought tag extraction |
//! | [`error`] | Unified error type and classification |

pub mod client;
pub mod error;
pub mod reasoning;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder, PollOptions};
pub use error::{ApiError, Error};
pub use reasoning::extract_reasoning;
pub use types::{
    Assistant, ChatCompletionRequest, ChatCompletionResponse, Message, ModerationResponse, Run,
    RunParams, RunStatus, Thread, ThreadMessage,
};

// Cancellation is cooperative: hand the same token to a call and cancel it
// from anywhere. Re-exported so callers don't need a direct tokio-util dep.
pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
