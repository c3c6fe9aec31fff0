//! Per-invocation request and result values.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Fully interpolated instruction text for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRequest {
    pub capability: &'static str,
    pub text: String,
    pub max_tokens: u32,
}

/// Token accounting reported by the backend, when available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Text generated for one capability invocation.
///
/// `text` is exactly what the backend returned; everything else is metadata.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub invocation_id: Uuid,
    pub capability: &'static str,
    pub model: String,
    pub text: String,
    pub usage: Option<TokenUsage>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn into_text(self) -> String {
        self.text
    }
}
