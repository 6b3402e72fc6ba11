use std::env;
use std::time::Duration;

use url::Url;

use crate::client::core::Client;
use crate::transport::{HttpTransport, TransportConfig};
use crate::{Error, Result};

/// Default maximum retry count (up to 4 total attempts).
pub const DEFAULT_RETRY_MAX: u32 = 3;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface small and predictable. Everything set here is frozen
/// into the [`Client`] at build time.
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    retry_max: u32,
    transport: TransportConfig,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            retry_max: DEFAULT_RETRY_MAX,
            transport: TransportConfig::default(),
            http_client: None,
        }
    }

    /// Seed the builder from `PIXIGPT_API_KEY` and `PIXIGPT_BASE_URL`.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(key) = env::var("PIXIGPT_API_KEY") {
            builder.api_key = Some(key);
        }
        if let Ok(base) = env::var("PIXIGPT_BASE_URL") {
            builder.base_url = Some(base);
        }
        builder
    }

    /// Bearer credential sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// API base URL, e.g. `https://api.pixigpt.com/v1`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Maximum retry attempts for failed requests (0 disables retries).
    pub fn retry_max(mut self, retry_max: u32) -> Self {
        self.retry_max = retry_max;
        self
    }

    /// Overall per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }

    /// Connection establishment timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.transport.connect_timeout = timeout;
        self
    }

    /// Per-host idle connection cap.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.transport.pool_max_idle_per_host = max;
        self
    }

    /// Supply a pre-built reqwest client, replacing the transport defaults.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("api_key is required".into()))?;

        let raw_base = self
            .base_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::Config("base_url is required".into()))?;

        let parsed = Url::parse(&raw_base)
            .map_err(|e| Error::Config(format!("invalid base_url {raw_base:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base_url must be http(s), got {:?}",
                parsed.scheme()
            )));
        }
        let base_url = raw_base.trim_end_matches('/').to_string();

        let transport =
            HttpTransport::new(api_key, base_url, &self.transport, self.http_client)?;

        Ok(Client {
            transport,
            retry_max: self.retry_max,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
