pub mod campaign_plan;
pub mod capability_catalog;
pub mod strategies;
pub mod strategy_dispatcher;
pub mod template_renderer;

pub use campaign_plan::{campaign_suite, PlanOutcome, PlanReport, PlanStep};
pub use capability_catalog::CapabilityCatalog;
pub use strategy_dispatcher::StrategyDispatcher;
pub use template_renderer::TemplateRenderer;
