//! Common test utilities for integration tests

use std::sync::Arc;

use detailing_strategist::adapters::backends::{MockBackend, MockReply};
use detailing_strategist::{ParameterSet, StrategyDispatcher};

pub const TEST_MODEL: &str = "claude-test-model";

/// Dispatcher over a fresh mock backend; the backend handle is returned for
/// inspecting recorded requests.
pub fn mock_dispatcher(reply: MockReply) -> (Arc<MockBackend>, StrategyDispatcher) {
    let backend = Arc::new(MockBackend::with_reply(reply));
    let dispatcher = StrategyDispatcher::new(backend.clone(), TEST_MODEL)
        .expect("builtin catalog is valid");
    (backend, dispatcher)
}

#[allow(dead_code)]
pub fn seo_params(business_name: &str) -> ParameterSet {
    ParameterSet::new()
        .with("business_name", business_name)
        .with("service_area", "Austin, TX")
        .with("google_rating", 4.8)
}

/// Route test logs through the test writer.
#[allow(dead_code)]
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Messages API success body with a single text block.
#[allow(dead_code)]
pub fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test123",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "model": TEST_MODEL,
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 1200, "output_tokens": 350}
    })
}
