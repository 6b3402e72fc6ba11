use crate::client::builder::ClientBuilder;
use crate::transport::HttpTransport;
use crate::Result;

/// PixiGPT API client.
///
/// Immutable after construction and safe to share across tasks; all calls go
/// through one pooled transport. Configuration changes require building a new
/// instance.
#[derive(Debug)]
pub struct Client {
    pub(crate) transport: HttpTransport,
    pub(crate) retry_max: u32,
}

impl Client {
    /// Create a client with production defaults (see [`ClientBuilder`]).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        ClientBuilder::new()
            .api_key(api_key)
            .base_url(base_url)
            .build()
    }

    /// Create a client from `PIXIGPT_API_KEY` and `PIXIGPT_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Maximum retry count configured for this client.
    pub fn retry_max(&self) -> u32 {
        self.retry_max
    }
}
