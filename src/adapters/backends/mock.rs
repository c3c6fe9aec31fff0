//! Mock backend for testing and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::domain::models::TokenUsage;
use crate::domain::ports::{
    BackendError, BackendRequest, BackendResponse, ContentSegment, GenerationBackend,
};

/// Scripted reply for one call.
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// Fixed text
    Text(String),
    /// The request's prompt, returned verbatim
    Echo,
    /// A response with no content segments
    Empty,
    /// A response whose first segment is non-text
    NonText(String),
    Unavailable(String),
    Rejected(String),
}

impl Default for MockReply {
    fn default() -> Self {
        Self::Text("Mock strategy generated.".to_string())
    }
}

/// In-memory [`GenerationBackend`] that records every request.
///
/// Replies come from a queue first, then from the default reply.
#[derive(Debug, Default)]
pub struct MockBackend {
    default_reply: MockReply,
    queued: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<BackendRequest>>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            default_reply: reply,
            ..Default::default()
        }
    }

    /// Delay every call, to let concurrent invocations interleave.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queue a reply for the next unanswered call.
    pub fn push_reply(&self, reply: MockReply) {
        lock(&self.queued).push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<BackendRequest> {
        lock(&self.requests).clone()
    }

    fn next_reply(&self) -> MockReply {
        lock(&self.queued)
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

// A panicking test thread must not hide what was recorded before it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn usage_for(request: &BackendRequest, output: &str) -> TokenUsage {
    let input: usize = request.messages.iter().map(|m| m.content.len()).sum();
    TokenUsage {
        input_tokens: (input / 4) as u64,
        output_tokens: (output.len() / 4) as u64,
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, request: BackendRequest) -> Result<BackendResponse, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.requests).push(request.clone());
        let reply = self.next_reply();

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let text = match reply {
            MockReply::Text(text) => text,
            MockReply::Echo => request
                .messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            MockReply::Empty => return Ok(BackendResponse::default()),
            MockReply::NonText(kind) => {
                return Ok(BackendResponse {
                    segments: vec![ContentSegment::Other(kind)],
                    ..Default::default()
                })
            }
            MockReply::Unavailable(msg) => return Err(BackendError::Unavailable(msg)),
            MockReply::Rejected(msg) => return Err(BackendError::Rejected(msg)),
        };

        Ok(BackendResponse {
            usage: Some(usage_for(&request, &text)),
            segments: vec![ContentSegment::Text(text)],
            stop_reason: Some("end_turn".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::BackendMessage;

    fn request(prompt: &str) -> BackendRequest {
        BackendRequest {
            model: "mock-model".to_string(),
            max_tokens: 100,
            messages: vec![BackendMessage::user(prompt)],
        }
    }

    #[tokio::test]
    async fn test_default_reply_and_recording() {
        let backend = MockBackend::new();
        let response = backend.generate(request("hello")).await.unwrap();

        assert_eq!(response.primary_text().unwrap(), "Mock strategy generated.");
        assert_eq!(backend.call_count(), 1);
        assert_eq!(backend.requests()[0].messages[0].content, "hello");
    }

    #[tokio::test]
    async fn test_queued_replies_take_precedence() {
        let backend = MockBackend::with_reply(MockReply::Echo);
        backend.push_reply(MockReply::Unavailable("overloaded".to_string()));

        let first = backend.generate(request("ping")).await;
        assert_eq!(first, Err(BackendError::Unavailable("overloaded".to_string())));

        let second = backend.generate(request("ping")).await.unwrap();
        assert_eq!(second.primary_text().unwrap(), "ping");
        assert_eq!(backend.call_count(), 2);
    }
}
