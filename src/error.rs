//! Error types for the GitHub repository analyzer
//!
//! Every failure is an [`Error`] tagged with an [`ErrorKind`]. Raw failures
//! from the remote listing service become errors through
//! [`crate::client::classify`], the only place HTTP status codes are read.

use std::time::Duration;
use thiserror::Error;

const RATE_LIMIT_TIP: &str =
    "Wait a few minutes before trying again, or use a personal access token for higher limits";

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Underlying failure preserved on a classified error
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of an [`Error`], used to pick the label and tip shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, invalid, or under-privileged token (401, plain 403)
    Authentication,
    /// Rate limit exhausted (429, 403 with a rate-limit signal)
    RateLimit,
    /// Account does not exist (404)
    NotFound,
    /// Bad local input or a 422 from the API
    Validation,
    /// Timeout or connection failure
    Network,
    /// Any other API failure
    Api,
    /// Bad local settings
    Configuration,
    /// Cache I/O failure; logged, never surfaced by the fetch path
    Cache,
    /// Catch-all
    Other,
}

impl ErrorKind {
    /// Heading printed before the message.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Authentication => "Authentication Error",
            ErrorKind::RateLimit => "Rate Limit Error",
            ErrorKind::NotFound => "Not Found Error",
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Network => "Network Error",
            ErrorKind::Api => "API Error",
            ErrorKind::Configuration => "Configuration Error",
            ErrorKind::Cache => "Cache Error",
            ErrorKind::Other => "Error",
        }
    }
}

/// Structured details attached to an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. "listing repositories for user octocat"
    pub operation: Option<String>,
    /// Input field that failed validation
    pub field: Option<String>,
    /// HTTP status code returned by the API
    pub status_code: Option<u16>,
    /// Retry hint from a `Retry-After` header
    pub retry_after: Option<Duration>,
}

/// Top-level error type for the application
#[derive(Debug, Error)]
#[error("{}", prefixed(.context.operation.as_deref(), .message))]
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: ErrorContext,
    #[source]
    cause: Option<Cause>,
}

fn prefixed(operation: Option<&str>, message: &str) -> String {
    match operation {
        Some(op) => format!("{}: {}", op, message),
        None => message.to_string(),
    }
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
            cause: None,
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Input validation failure for a named field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message).with_field(field)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cache, message)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Api, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context.operation = Some(operation.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// One-line hint for resolving the error, if there is one.
    pub fn tip(&self) -> Option<String> {
        let tip = match self.kind {
            ErrorKind::Authentication => {
                "Set GITHUB_TOKEN environment variable or use --token option".to_string()
            }
            ErrorKind::RateLimit => RATE_LIMIT_TIP.to_string(),
            ErrorKind::NotFound => "Check the username or organization name is correct".to_string(),
            ErrorKind::Network => "Check your internet connection and try again".to_string(),
            ErrorKind::Validation => match self.context.field {
                Some(ref field) => format!("Check the {} value is valid", field),
                None => "Check your input values are valid".to_string(),
            },
            ErrorKind::Configuration => "Check your configuration settings".to_string(),
            ErrorKind::Api => "Check the GitHub API status and try again later".to_string(),
            ErrorKind::Cache => "Try clearing the cache or use the --no-cache option".to_string(),
            ErrorKind::Other => return None,
        };
        Some(tip)
    }

    /// Message for end-user display, without the operation prefix.
    pub fn user_message(&self) -> String {
        match (self.kind, self.context.field.as_deref()) {
            (ErrorKind::Validation, Some(field)) => {
                format!("{} ({}): {}", self.kind.label(), field, self.message())
            }
            _ => format!("{}: {}", self.kind.label(), self.message()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::other(format!("I/O error: {}", err)).with_cause(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::other(format!("JSON error: {}", err)).with_cause(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::configuration(format!("Failed to parse configuration: {}", err)).with_cause(err)
    }
}
