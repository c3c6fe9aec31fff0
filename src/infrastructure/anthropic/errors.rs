use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors from talking to the Messages API
#[derive(Error, Debug)]
pub enum AnthropicApiError {
    /// HTTP 400
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP 401
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// HTTP 403
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// HTTP 404, usually an unknown model
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 429
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// HTTP 529
    #[error("API overloaded: {0}")]
    Overloaded(String),

    /// Any other 5xx
    #[error("Server error ({0}): {1}")]
    Server(StatusCode, String),

    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx body that does not parse as a Messages response
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// Client could not be built from its configuration
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Unexpected status ({0}): {1}")]
    Unexpected(StatusCode, String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AnthropicApiError {
    /// Classify a non-success response.
    ///
    /// The API wraps failures as `{"type":"error","error":{"type":..,"message":..}}`;
    /// when the body has that shape only the message is kept.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());

        match status.as_u16() {
            400 => Self::InvalidRequest(message),
            401 => Self::Authentication(message),
            403 => Self::PermissionDenied(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited(message),
            529 => Self::Overloaded(message),
            _ if status.is_server_error() => Self::Server(status, message),
            _ => Self::Unexpected(status, message),
        }
    }

    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited(_) | Self::Overloaded(_) | Self::Server(_, _) | Self::Network(_)
        )
    }
}
