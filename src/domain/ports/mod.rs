//! Ports: traits the domain depends on, implemented by adapters.

pub mod backend;

pub use backend::{
    BackendError, BackendMessage, BackendRequest, BackendResponse, ContentSegment,
    GenerationBackend, MessageRole,
};
