use reqwest::{header, Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::errors::AnthropicApiError;
use super::retry::RetryPolicy;
use super::types::{MessagesRequest, MessagesResponse};

/// Connection settings for [`AnthropicClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicClientConfig {
    pub api_key: String,
    /// Without the `/v1/messages` suffix
    pub base_url: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl AnthropicClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 120,
            max_retries: 2,
            initial_backoff_ms: 1_000,
            max_backoff_ms: 30_000,
        }
    }
}

/// Key prefix safe to put in logs.
fn redact(api_key: &str) -> String {
    match api_key.get(..8) {
        Some(prefix) if api_key.len() > 8 => format!("{prefix}...[REDACTED]"),
        _ => "[REDACTED]".to_string(),
    }
}

/// Messages API client with pooled connections and retry on transient errors.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http_client: ReqwestClient,
    endpoint: String,
    retry_policy: RetryPolicy,
}

impl AnthropicClient {
    pub fn new(config: AnthropicClientConfig) -> Result<Self, AnthropicApiError> {
        info!(
            base_url = %config.base_url,
            api_version = %config.api_version,
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            api_key = %redact(&config.api_key),
            "Initializing Anthropic client"
        );

        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|e| AnthropicApiError::InvalidConfig(format!("API key is not a valid header: {e}")))?;
        api_key.set_sensitive(true);
        let api_version = header::HeaderValue::from_str(&config.api_version).map_err(|e| {
            AnthropicApiError::InvalidConfig(format!("API version is not a valid header: {e}"))
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert("x-api-key", api_key);
        headers.insert("anthropic-version", api_version);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/v1/messages", config.base_url.trim_end_matches('/')),
            retry_policy: RetryPolicy::new(
                config.max_retries,
                config.initial_backoff_ms,
                config.max_backoff_ms,
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one Messages request, retrying transient failures per the policy.
    #[instrument(skip(self, request), fields(model = %request.model, max_tokens = request.max_tokens))]
    pub async fn send_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicApiError> {
        let response = self
            .retry_policy
            .execute(|| self.execute_once(request))
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Messages request succeeded"
            );
        }
        Ok(response)
    }

    async fn execute_once(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicApiError> {
        debug!(url = %self.endpoint, "POST");
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<MessagesResponse, AnthropicApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "Messages API returned an error");
            return Err(AnthropicApiError::from_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| AnthropicApiError::Decode(e.to_string()))
    }
}
