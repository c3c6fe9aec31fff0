//! Detailing Strategist - marketing strategy generation for car detailing businesses
//!
//! A catalog of marketing "capabilities" (local SEO, referral programs,
//! crisis plans, ...), each a prompt template with typed parameters. The
//! dispatcher renders a capability against the shared detailing knowledge
//! base and sends it to a text-generation backend in a single round trip.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and the backend port
//! - **Service Layer** (`services`): catalog, renderer and dispatcher
//! - **Adapters** (`adapters`): Anthropic and mock backends
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, config, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use detailing_strategist::adapters::backends::MockBackend;
//! use detailing_strategist::StrategyDispatcher;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let dispatcher = StrategyDispatcher::new(Arc::new(MockBackend::new()), "claude-3-5-sonnet-20241022")?;
//! let seo = dispatcher
//!     .generate_local_seo_strategy("Shine & Sparkle Detailing", "Austin, TX", 4.8)
//!     .await?;
//! println!("{}", seo.text);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::errors::{CatalogError, FailureStage, StrategyError, StrategyResult};
pub use domain::models::{
    AgentConfiguration, BusinessType, CapabilitySpec, Config, GenerationResult, KnowledgeBase,
    ParamValue, ParameterSet, RenderedRequest,
};
pub use domain::ports::{BackendError, GenerationBackend};
pub use services::{CapabilityCatalog, StrategyDispatcher, TemplateRenderer};
