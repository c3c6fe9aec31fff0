//! Multi-capability campaign runs for one business profile.

use futures::future::join_all;
use tracing::info;

use crate::domain::errors::StrategyResult;
use crate::domain::models::{AgentConfiguration, GenerationResult, ParameterSet};
use crate::services::strategy_dispatcher::StrategyDispatcher;

/// Star rating assumed when the profile carries no metrics.
const FALLBACK_GOOGLE_RATING: f64 = 4.8;
const FALLBACK_REPEAT_RATE: f64 = 0.45;
const DEMO_CUSTOMER_LIFETIME_MONTHS: u32 = 24;
const DEMO_VIDEO_BUDGET: f64 = 500.0;

/// One capability invocation in a plan.
#[derive(Debug, Clone)]
pub struct PlanStep {
    pub label: &'static str,
    pub capability: &'static str,
    pub params: ParameterSet,
}

impl PlanStep {
    fn new(label: &'static str, capability: &'static str, params: ParameterSet) -> Self {
        Self {
            label,
            capability,
            params,
        }
    }
}

#[derive(Debug)]
pub struct PlanOutcome {
    pub step: PlanStep,
    pub result: StrategyResult<GenerationResult>,
}

/// Outcomes in step order.
#[derive(Debug, Default)]
pub struct PlanReport {
    pub outcomes: Vec<PlanOutcome>,
}

impl PlanReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// The standard campaign suite, specialised to `profile`.
///
/// Values the profile cannot supply (sample services, fleet industries,
/// customer lifetime) use fixed example inputs.
pub fn campaign_suite(profile: &AgentConfiguration) -> Vec<PlanStep> {
    let rating = profile
        .metrics
        .as_ref()
        .map_or(FALLBACK_GOOGLE_RATING, |m| m.google_rating);
    let repeat_rate = profile
        .metrics
        .as_ref()
        .map_or(FALLBACK_REPEAT_RATE, |m| m.repeat_customer_rate);
    let area = profile.service_area.as_str();

    vec![
        PlanStep::new("Marketing strategy", "marketing_strategy", profile.parameters()),
        PlanStep::new(
            "Social media content",
            "social_media_content",
            ParameterSet::new()
                .with("service_type", "Ceramic Coating Services")
                .with("num_posts", 3_u32),
        ),
        PlanStep::new(
            "Email campaign",
            "email_campaign",
            ParameterSet::new()
                .with("audience_segment", "Past Customers")
                .with("campaign_type", "Seasonal Promotion"),
        ),
        PlanStep::new(
            "Referral program",
            "referral_program",
            ParameterSet::new()
                .with("business_type", profile.business_type.as_str())
                .with("service_level", "premium"),
        ),
        PlanStep::new(
            "Pricing strategy",
            "pricing_strategy",
            ParameterSet::new()
                .with("business_size", "small")
                .with("market_position", "premium")
                .with("service_area", area),
        ),
        PlanStep::new(
            "Local SEO strategy",
            "local_seo",
            ParameterSet::new()
                .with("business_name", profile.business_name.as_str())
                .with("service_area", area)
                .with("google_rating", rating),
        ),
        PlanStep::new(
            "Video marketing strategy",
            "video_marketing",
            ParameterSet::new()
                .with("business_type", profile.business_type.as_str())
                .with("monthly_budget", DEMO_VIDEO_BUDGET),
        ),
        PlanStep::new(
            "Fleet marketing strategy",
            "fleet_marketing",
            ParameterSet::new()
                .with(
                    "industry_targets",
                    &["Taxi Services", "Rental Companies", "Logistics"][..],
                )
                .with("service_area", area),
        ),
        PlanStep::new(
            "Customer retention strategy",
            "retention_marketing",
            ParameterSet::new()
                .with("average_customer_lifetime", DEMO_CUSTOMER_LIFETIME_MONTHS)
                .with("repeat_rate", repeat_rate),
        ),
    ]
}

impl StrategyDispatcher {
    /// Run every step concurrently. A failing step does not affect the others.
    pub async fn run_plan(&self, steps: Vec<PlanStep>) -> PlanReport {
        info!(steps = steps.len(), "Running campaign plan");
        let results = join_all(
            steps
                .iter()
                .map(|step| self.invoke(step.capability, &step.params)),
        )
        .await;

        let report = PlanReport {
            outcomes: steps
                .into_iter()
                .zip(results)
                .map(|(step, result)| PlanOutcome { step, result })
                .collect(),
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Campaign plan finished"
        );
        report
    }
}
