//! Domain models.

pub mod capability;
pub mod config;
pub mod generation;
pub mod knowledge;
pub mod params;
pub mod profile;
pub mod strategy_templates;

pub use capability::{
    parse_template, BoundParameters, CapabilitySpec, PlaceholderFormat, Segment,
    KNOWLEDGE_PLACEHOLDER,
};
pub use config::{BackendConfig, BackendProvider, Config, LoggingConfig};
pub use generation::{GenerationResult, RenderedRequest, TokenUsage};
pub use knowledge::KnowledgeBase;
pub use params::{ParamKind, ParamSpec, ParamValue, ParameterSet};
pub use profile::{AgentConfiguration, BusinessMetrics, BusinessType, MarketingChannels};
