//! Unified error type for the PixiGPT client.
//!
//! Every failure path in the crate produces exactly one value of [`Error`].
//! The request executor uses the classification here to decide retry
//! eligibility; callers use it to decide reporting.

use serde::Deserialize;
use thiserror::Error;

use crate::transport::TransportError;
use crate::types::{Run, RunStatus};

/// Structured error returned by the PixiGPT API (OpenAI-compatible shape).
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code the error arrived with.
    pub status: u16,
    /// Machine-readable category, e.g. `invalid_request_error`.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// Optional fine-grained code, e.g. `model_not_found`.
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}: {}", code, self.kind, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

// Wire shape: {"error": {"message": ..., "type": ..., "code": ...}}
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    code: Option<String>,
}

/// Unified error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (connect, TLS, timeout, DNS). Always retryable.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Structured error reported by the API.
    #[error("API error: {0}")]
    Api(ApiError),

    /// Non-JSON error body; carries the raw status and text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON (de)serialization failure. A malformed success body lands here;
    /// fatal, never retried.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration (empty credential, malformed base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// The retry ceiling was reached; wraps the last observed error.
    #[error("max retries exceeded after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    /// The caller cancelled the operation or its deadline elapsed.
    #[error("operation cancelled")]
    Cancelled,

    /// A run reached a terminal failure state. Carries the last run record.
    #[error("run {} ended with status {status}", .run.id)]
    RunEnded { status: RunStatus, run: Box<Run> },
}

impl Error {
    /// Classify a non-2xx response body into [`Error::Api`] or, when the
    /// body is not the structured envelope, [`Error::Http`].
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Error::Api(ApiError {
                status,
                kind: envelope.error.kind,
                message: envelope.error.message,
                code: envelope.error.code,
            }),
            Err(_) => Error::Http {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    /// Whether the executor may retry after this error.
    ///
    /// Transport failures are assumed transient; so are 5xx responses.
    /// Everything else fails the call immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Api(e) => e.status >= 500,
            Error::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Http { status, .. } => Some(*status),
            Error::RetriesExhausted { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True if the API rejected the credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api(e) if e.kind == "authentication_error")
    }

    /// True if the API rate limit was hit.
    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, Error::Api(e) if e.kind == "rate_limit_error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_error_envelope() {
        let body = br#"{"error":{"message":"assistant not found","type":"invalid_request_error","code":"assistant_not_found"}}"#;
        let err = Error::from_response(404, body);
        match &err {
            Error::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.kind, "invalid_request_error");
                assert_eq!(api.code.as_deref(), Some("assistant_not_found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "API error: [assistant_not_found] invalid_request_error: assistant not found"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn falls_back_to_raw_body_for_non_json() {
        let err = Error::from_response(502, b"bad gateway");
        match &err {
            Error::Http { status, body } => {
                assert_eq!(*status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
        assert!(err.is_retryable());
    }

    #[test]
    fn error_kind_helpers() {
        let auth = Error::from_response(
            401,
            br#"{"error":{"message":"bad key","type":"authentication_error"}}"#,
        );
        assert!(auth.is_auth_error());
        assert!(!auth.is_rate_limit_error());

        let limited = Error::from_response(
            429,
            br#"{"error":{"message":"slow down","type":"rate_limit_error"}}"#,
        );
        assert!(limited.is_rate_limit_error());
        assert_eq!(limited.status(), Some(429));
    }

    #[test]
    fn server_errors_are_retryable_and_client_errors_are_not() {
        let server =
            Error::from_response(500, br#"{"error":{"message":"boom","type":"server_error"}}"#);
        assert!(server.is_retryable());

        let client =
            Error::from_response(400, br#"{"error":{"message":"bad","type":"invalid_request_error"}}"#);
        assert!(!client.is_retryable());
    }
}
