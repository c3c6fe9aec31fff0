//! [`GenerationBackend`](crate::domain::ports::GenerationBackend) implementations.

pub mod anthropic;
pub mod mock;

pub use anthropic::AnthropicBackend;
pub use mock::{MockBackend, MockReply};
