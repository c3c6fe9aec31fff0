//! HTTP client for the Anthropic Messages API.

pub mod client;
pub mod errors;
pub mod retry;
pub mod types;

pub use client::{AnthropicClient, AnthropicClientConfig};
pub use errors::AnthropicApiError;
pub use retry::RetryPolicy;
pub use types::{ApiMessage, ApiUsage, MessagesRequest, MessagesResponse, ResponseBlock};
