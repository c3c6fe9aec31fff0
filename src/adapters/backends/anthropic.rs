//! Anthropic Messages API backend.

use async_trait::async_trait;

use crate::domain::models::{BackendConfig, TokenUsage};
use crate::domain::ports::{
    BackendError, BackendRequest, BackendResponse, ContentSegment, GenerationBackend, MessageRole,
};
use crate::infrastructure::anthropic::{
    AnthropicApiError, AnthropicClient, AnthropicClientConfig, ApiMessage, MessagesRequest,
    MessagesResponse,
};

/// [`GenerationBackend`] over [`AnthropicClient`].
#[derive(Debug, Clone)]
pub struct AnthropicBackend {
    client: AnthropicClient,
}

impl AnthropicBackend {
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }

    /// Build from backend configuration; needs an API key from config or
    /// `ANTHROPIC_API_KEY`.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AnthropicApiError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            AnthropicApiError::InvalidConfig(
                "no API key: set backend.api_key or ANTHROPIC_API_KEY".to_string(),
            )
        })?;

        let client = AnthropicClient::new(AnthropicClientConfig {
            api_key,
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
            initial_backoff_ms: config.initial_backoff_ms,
            max_backoff_ms: config.max_backoff_ms,
        })?;
        Ok(Self::new(client))
    }
}

fn to_wire(request: BackendRequest) -> MessagesRequest {
    MessagesRequest {
        model: request.model,
        max_tokens: request.max_tokens,
        messages: request
            .messages
            .into_iter()
            .map(|message| ApiMessage {
                role: match message.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: message.content,
            })
            .collect(),
        system: None,
    }
}

fn from_wire(response: MessagesResponse) -> BackendResponse {
    BackendResponse {
        segments: response
            .content
            .into_iter()
            .map(|block| match (block.kind.as_str(), block.text) {
                ("text", Some(text)) => ContentSegment::Text(text),
                (_, _) => ContentSegment::Other(block.kind),
            })
            .collect(),
        stop_reason: response.stop_reason,
        usage: response.usage.map(|usage| TokenUsage {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }),
    }
}

impl From<AnthropicApiError> for BackendError {
    fn from(err: AnthropicApiError) -> Self {
        match err {
            AnthropicApiError::Decode(msg) => Self::Malformed(msg),
            err if err.is_transient() => Self::Unavailable(err.to_string()),
            err => Self::Rejected(err.to_string()),
        }
    }
}

#[async_trait]
impl GenerationBackend for AnthropicBackend {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        let response = self.client.send_message(&to_wire(request)).await?;
        Ok(from_wire(response))
    }
}
