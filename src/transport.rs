//! Pooled HTTP transport.
//!
//! One [`HttpTransport`] is built per [`Client`](crate::Client) and shared by
//! every call. It performs exactly one attempt per invocation; the retry
//! policy lives in the execution layer.

use std::env;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Method;

/// Connection-pool and timeout settings, fixed at client construction.
///
/// Defaults are production-friendly and env-overridable:
/// - `PIXIGPT_HTTP_TIMEOUT_SECS` (default 30)
/// - `PIXIGPT_HTTP_CONNECT_TIMEOUT_SECS` (default 10)
/// - `PIXIGPT_HTTP_POOL_MAX_IDLE_PER_HOST` (default 10)
/// - `PIXIGPT_HTTP_POOL_IDLE_TIMEOUT_SECS` (default 90)
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub tcp_keepalive: Duration,
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|s| s.parse::<u64>().ok())
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(env_u64("PIXIGPT_HTTP_TIMEOUT_SECS").unwrap_or(30)),
            connect_timeout: Duration::from_secs(
                env_u64("PIXIGPT_HTTP_CONNECT_TIMEOUT_SECS").unwrap_or(10),
            ),
            pool_max_idle_per_host: env_u64("PIXIGPT_HTTP_POOL_MAX_IDLE_PER_HOST").unwrap_or(10)
                as usize,
            pool_idle_timeout: Duration::from_secs(
                env_u64("PIXIGPT_HTTP_POOL_IDLE_TIMEOUT_SECS").unwrap_or(90),
            ),
            tcp_keepalive: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub(crate) fn new(
        api_key: String,
        base_url: String,
        config: &TransportConfig,
        client_override: Option<reqwest::Client>,
    ) -> Result<Self, TransportError> {
        let client = match client_override {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .connect_timeout(config.connect_timeout)
                .pool_max_idle_per_host(config.pool_max_idle_per_host)
                .pool_idle_timeout(Some(config.pool_idle_timeout))
                .tcp_keepalive(Some(config.tcp_keepalive))
                .build()
                .map_err(TransportError::Http)?,
        };

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Execute a single HTTP attempt. Authentication and content negotiation
    /// are applied uniformly; no retries happen here.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .client
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            req = req.json(body);
        }

        req.send().await.map_err(TransportError::Http)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
