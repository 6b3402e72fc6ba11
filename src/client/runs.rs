//! Run operations and the completion poller.
//!
//! A run is processed asynchronously by the server; [`Client::wait_for_run`]
//! converts that into a synchronous wait by re-checking the status on a fixed
//! interval until a terminal state, cancellation or deadline.

use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::client::core::Client;
use crate::types::{Run, RunParams, RunStatus};
use crate::{Error, Result};

/// Default delay between status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Options for [`Client::wait_for_run_opts`].
///
/// Cancellation and deadline both surface as [`Error::Cancelled`] and win
/// immediately over a pending tick.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Delay between status checks.
    pub interval: Duration,
    /// Overall deadline for the wait.
    pub timeout: Option<Duration>,
    /// Cooperative cancellation for the wait and its status calls.
    pub cancel: Option<CancellationToken>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
            cancel: None,
        }
    }
}

async fn cancelled(token: &Option<CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

async fn deadline_reached(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl Client {
    /// Start an asynchronous run on a thread.
    ///
    /// Unset optionals in `params` defer to server defaults.
    pub async fn create_run(&self, thread_id: &str, params: &RunParams) -> Result<Run> {
        let mut body = json!({
            "assistant_id": params.assistant_id,
            "enable_thinking": params.enable_thinking,
        });
        if let Some(temperature) = params.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        let run: Run = self
            .request(Method::POST, &format!("/threads/{thread_id}/runs"), Some(body))
            .await?;

        // The server is expected to report queued or in_progress here; any
        // other initial state is an anomaly worth surfacing, not an error.
        if run.status.is_terminal() {
            warn!(run_id = %run.id, status = %run.status, "run started in a terminal state");
        }

        Ok(run)
    }

    /// Retrieve the current status of a run.
    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.request(
            Method::GET,
            &format!("/threads/{thread_id}/runs/{run_id}"),
            None,
        )
        .await
    }

    /// Poll until the run reaches a terminal state, checking every 500ms.
    ///
    /// Returns the completed run, or [`Error::RunEnded`] if the run failed or
    /// was cancelled server-side. A failed status call aborts the wait — the
    /// executor has already retried transport faults internally.
    pub async fn wait_for_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.wait_for_run_opts(thread_id, run_id, PollOptions::default())
            .await
    }

    /// [`Client::wait_for_run`] with a custom interval, deadline and
    /// cancellation token.
    pub async fn wait_for_run_opts(
        &self,
        thread_id: &str,
        run_id: &str,
        opts: PollOptions,
    ) -> Result<Run> {
        let deadline = opts.timeout.map(|t| Instant::now() + t);
        let path = format!("/threads/{thread_id}/runs/{run_id}");

        loop {
            tokio::select! {
                biased;
                _ = cancelled(&opts.cancel) => return Err(Error::Cancelled),
                _ = deadline_reached(deadline) => return Err(Error::Cancelled),
                _ = tokio::time::sleep(opts.interval) => {}
            }

            let run: Run = match &opts.cancel {
                Some(token) => {
                    self.request_with_cancel(Method::GET, &path, None, token)
                        .await?
                }
                None => self.request(Method::GET, &path, None).await?,
            };

            match run.status {
                RunStatus::Completed => return Ok(run),
                RunStatus::Failed | RunStatus::Cancelled => {
                    return Err(Error::RunEnded {
                        status: run.status,
                        run: Box::new(run),
                    })
                }
                RunStatus::Queued | RunStatus::InProgress => {}
            }
        }
    }
}
