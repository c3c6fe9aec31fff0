//! Text-generation backend port.
//!
//! The dispatcher only ever talks to a [`GenerationBackend`]. Concrete
//! backends (the Anthropic HTTP API, the offline mock) live in `adapters`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::StrategyError;
use crate::domain::models::TokenUsage;

/// Author of a message sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMessage {
    pub role: MessageRole,
    pub content: String,
}

impl BackendMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Request handed to a backend: model, output ceiling and the messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<BackendMessage>,
}

/// One piece of backend output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSegment {
    Text(String),
    /// Non-text output (tool calls and the like), identified by its type name.
    Other(String),
}

/// Backend reply: ordered content segments plus optional accounting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendResponse {
    pub segments: Vec<ContentSegment>,
    pub stop_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl BackendResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![ContentSegment::Text(text.into())],
            ..Default::default()
        }
    }

    /// Text of the first segment.
    ///
    /// An empty segment list, or a first segment that is not text, breaks the
    /// backend contract.
    pub fn primary_text(&self) -> Result<&str, BackendError> {
        match self.segments.first() {
            Some(ContentSegment::Text(text)) => Ok(text),
            Some(ContentSegment::Other(kind)) => Err(BackendError::Malformed(format!(
                "first content segment is '{kind}', not text"
            ))),
            None => Err(BackendError::Malformed(
                "response contained no content segments".to_string(),
            )),
        }
    }
}

/// Failures reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Network failure, timeout, overload or rate limiting.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the request (auth, quota, invalid request, policy).
    #[error("Backend rejected request: {0}")]
    Rejected(String),

    /// The backend answered with something that is not a usable response.
    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

impl From<BackendError> for StrategyError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable(msg) => Self::BackendUnavailable(msg),
            BackendError::Rejected(msg) => Self::BackendRejected(msg),
            BackendError::Malformed(msg) => Self::MalformedBackendResponse(msg),
        }
    }
}

/// Port trait for text-generation backends
///
/// Implementations must be `Send + Sync`; the dispatcher shares one backend
/// across concurrent invocations and never wraps it in a lock. Retries, if
/// any, are the implementation's business.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short identifier, e.g. "anthropic" or "mock"
    fn name(&self) -> &'static str;

    /// Perform one request/response round trip
    async fn generate(&self, request: BackendRequest) -> Result<BackendResponse, BackendError>;
}
