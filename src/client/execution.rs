//! Request execution: the single choke point for every outbound call.
//!
//! One logical operation (method + path + optional body) becomes a retried,
//! backoff-governed HTTP exchange. Each call's retry loop, backoff timer and
//! last-error slot are local to that call, so concurrent calls sharing the
//! client need no locking.

use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::client::core::Client;
use crate::client::policy::{Decision, RetryPolicy};
use crate::transport::TransportError;
use crate::{Error, Result};

impl Client {
    /// Execute a request and deserialize the response body into `T`.
    ///
    /// Transport faults and 5xx responses are retried with exponential
    /// backoff up to the configured ceiling; 4xx responses and malformed
    /// success bodies fail immediately.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let bytes = self.execute(method, path, body.as_ref(), None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`Client::request`], but aborts as soon as `cancel` fires —
    /// including mid-backoff — returning [`Error::Cancelled`].
    pub async fn request_with_cancel<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let bytes = self.execute(method, path, body.as_ref(), Some(cancel)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute a request whose response body is not needed (e.g. DELETE).
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.execute(method, path, body.as_ref(), None).await?;
        Ok(())
    }

    /// Retry loop over single transport attempts.
    ///
    /// Attempts run from 0 to `retry_max` inclusive. The loop keeps a
    /// last-error slot; exhaustion wraps the last observed error so it is
    /// never silently discarded.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Bytes> {
        let policy = RetryPolicy::new(self.retry_max);
        let mut last_err: Option<Error> = None;

        for attempt in 0..=policy.max_retries {
            if attempt > 0 {
                let delay = policy.backoff_delay(attempt);
                debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    path,
                    "backing off before retry"
                );
                if let Some(token) = cancel {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => return Err(Error::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                } else {
                    tokio::time::sleep(delay).await;
                }
            }

            let send = self.transport.send(method.clone(), path, body);
            let resp = if let Some(token) = cancel {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(Error::Cancelled),
                    resp = send => resp,
                }
            } else {
                send.await
            };

            let resp = match resp {
                Ok(resp) => resp,
                Err(e) => {
                    warn!(attempt, path, error = %e, "transport failure, will retry");
                    last_err = Some(Error::Transport(e));
                    continue;
                }
            };

            let status = resp.status().as_u16();

            // Always read the body to completion, success or error, so the
            // connection goes back to the pool.
            let body_bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(attempt, path, error = %e, "failed to read response body");
                    last_err = Some(Error::Transport(TransportError::Http(e)));
                    continue;
                }
            };

            if status >= 400 {
                let err = Error::from_response(status, &body_bytes);
                match policy.decide(&err) {
                    Decision::Retry => {
                        warn!(http_status = status, attempt, path, "server error, will retry");
                        last_err = Some(err);
                        continue;
                    }
                    Decision::Fail => return Err(err),
                }
            }

            return Ok(body_bytes);
        }

        let attempts = policy.max_retries + 1;
        match last_err {
            Some(source) => Err(Error::RetriesExhausted {
                attempts,
                source: Box::new(source),
            }),
            // Unreachable: every continue records an error first.
            None => Err(Error::Transport(TransportError::Other(
                "retry loop exited without an error".into(),
            ))),
        }
    }
}
