//! Classification of raw remote failures into [`Error`]s
//!
//! The listing service reports failures as [`RemoteFailure`] values. They are
//! turned into the application error taxonomy exactly once, at the lister
//! boundary, by [`classify`].

use std::time::Duration;

use thiserror::Error as ThisError;

use crate::error::{Error, ErrorContext, ErrorKind};

const RATE_LIMIT_MESSAGE: &str = "GitHub API rate limit exceeded. Please wait before trying \
                                  again. Consider using a personal access token for higher limits.";

/// A failure from the remote listing service, before classification.
#[derive(Debug, ThisError)]
pub enum RemoteFailure {
    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
        /// Seconds from a `Retry-After` header
        retry_after: Option<u64>,
        /// `X-RateLimit-Remaining` was `0`
        quota_exhausted: bool,
    },

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Transport(String),

    /// The body could not be decoded as a list of records.
    #[error("undecodable response: {0}")]
    Decode(String),
}

impl RemoteFailure {
    /// Build a status failure with no rate-limit headers.
    #[cfg(test)]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        RemoteFailure::Status {
            status,
            body: body.into(),
            retry_after: None,
            quota_exhausted: false,
        }
    }

    /// Whether this failure should be retried by the backoff loop.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            RemoteFailure::Status { status: 429, .. } => true,
            RemoteFailure::Status {
                status: 403,
                body,
                quota_exhausted,
                ..
            } => *quota_exhausted || body.to_lowercase().contains("rate limit"),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for RemoteFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteFailure::Timeout(err.to_string())
        } else if err.is_connect() {
            RemoteFailure::Connect(err.to_string())
        } else if err.is_decode() {
            RemoteFailure::Decode(err.to_string())
        } else {
            RemoteFailure::Transport(err.to_string())
        }
    }
}

/// Conversion of a failure into a classified [`Error`].
pub trait Classify {
    fn classify(self, operation: &str) -> Error;
}

/// Classify `failure` as the outcome of `operation`.
pub fn classify<E: Classify>(failure: E, operation: &str) -> Error {
    failure.classify(operation)
}

impl Classify for Error {
    /// Already classified; returned unchanged.
    fn classify(self, _operation: &str) -> Error {
        self
    }
}

impl Classify for RemoteFailure {
    fn classify(self, operation: &str) -> Error {
        let mut context = ErrorContext {
            operation: Some(operation.to_string()),
            ..ErrorContext::default()
        };

        let (kind, message) = match &self {
            RemoteFailure::Status {
                status,
                body,
                retry_after,
                ..
            } => {
                context.status_code = Some(*status);
                context.retry_after = retry_after.map(Duration::from_secs);
                status_kind(&self, *status, body, operation)
            }
            RemoteFailure::Timeout(_) => (
                ErrorKind::Network,
                format!(
                    "Request timeout during {}. Please check your connection and try again.",
                    operation
                ),
            ),
            RemoteFailure::Connect(_) => (
                ErrorKind::Network,
                format!(
                    "Connection error during {}. Please check your internet connection.",
                    operation
                ),
            ),
            RemoteFailure::Transport(detail) => (
                ErrorKind::Network,
                format!("Network error during {}: {}", operation, detail),
            ),
            RemoteFailure::Decode(detail) => (
                ErrorKind::Api,
                format!("Invalid API response during {}: {}", operation, detail),
            ),
        };

        log::debug!("Classified failure during {} as {:?}", operation, kind);

        Error::new(kind, message)
            .with_context(context)
            .with_cause(self)
    }
}

fn status_kind(
    failure: &RemoteFailure,
    status: u16,
    body: &str,
    operation: &str,
) -> (ErrorKind, String) {
    match status {
        401 => (
            ErrorKind::Authentication,
            "Invalid GitHub token. Please check your token and try again.".to_string(),
        ),
        403 if failure.is_rate_limited() => (ErrorKind::RateLimit, RATE_LIMIT_MESSAGE.to_string()),
        403 => (
            ErrorKind::Authentication,
            "GitHub API access forbidden. Your token may lack required permissions.".to_string(),
        ),
        404 => (
            ErrorKind::NotFound,
            "GitHub user or organization not found. Please check the name and try again."
                .to_string(),
        ),
        422 => (ErrorKind::Validation, format!("Invalid request: {}", body)),
        429 => (ErrorKind::RateLimit, RATE_LIMIT_MESSAGE.to_string()),
        _ => (
            ErrorKind::Api,
            format!("GitHub API error during {}: {} {}", operation, status, body),
        ),
    }
}
