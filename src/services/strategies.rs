//! Typed entry points, one per built-in capability.
//!
//! Each method only assembles a [`ParameterSet`] and defers to
//! [`StrategyDispatcher::invoke`]; validation happens there.

use crate::domain::errors::StrategyResult;
use crate::domain::models::{AgentConfiguration, BusinessType, GenerationResult, ParameterSet};
use crate::services::strategy_dispatcher::StrategyDispatcher;

impl StrategyDispatcher {
    /// Comprehensive marketing strategy for a business profile.
    pub async fn generate_marketing_strategy(
        &self,
        profile: &AgentConfiguration,
    ) -> StrategyResult<GenerationResult> {
        self.invoke("marketing_strategy", &profile.parameters()).await
    }

    /// A batch of social posts promoting one service. `num_posts` defaults to 5.
    pub async fn create_social_media_content(
        &self,
        service_type: &str,
        num_posts: Option<u32>,
    ) -> StrategyResult<GenerationResult> {
        let mut params = ParameterSet::new().with("service_type", service_type);
        if let Some(n) = num_posts {
            params.insert("num_posts", n);
        }
        self.invoke("social_media_content", &params).await
    }

    pub async fn generate_email_campaign(
        &self,
        audience_segment: &str,
        campaign_type: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("audience_segment", audience_segment)
            .with("campaign_type", campaign_type);
        self.invoke("email_campaign", &params).await
    }

    pub async fn analyze_competitor(
        &self,
        competitor_name: &str,
        service_area: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("competitor_name", competitor_name)
            .with("service_area", service_area);
        self.invoke("competitor_analysis", &params).await
    }

    pub async fn generate_referral_program(
        &self,
        business_type: BusinessType,
        service_level: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("business_type", business_type.as_str())
            .with("service_level", service_level);
        self.invoke("referral_program", &params).await
    }

    pub async fn generate_pricing_strategy(
        &self,
        business_size: &str,
        market_position: &str,
        service_area: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("business_size", business_size)
            .with("market_position", market_position)
            .with("service_area", service_area);
        self.invoke("pricing_strategy", &params).await
    }

    pub async fn generate_local_seo_strategy(
        &self,
        business_name: &str,
        service_area: &str,
        google_rating: f64,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("business_name", business_name)
            .with("service_area", service_area)
            .with("google_rating", google_rating);
        self.invoke("local_seo", &params).await
    }

    pub async fn create_video_marketing_strategy(
        &self,
        business_type: BusinessType,
        monthly_budget: f64,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("business_type", business_type.as_str())
            .with("monthly_budget", monthly_budget);
        self.invoke("video_marketing", &params).await
    }

    pub async fn create_fleet_marketing_strategy(
        &self,
        industry_targets: &[&str],
        service_area: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("industry_targets", industry_targets)
            .with("service_area", service_area);
        self.invoke("fleet_marketing", &params).await
    }

    pub async fn create_influencer_partnership_plan(
        &self,
        niche: &str,
        region: &str,
        budget: f64,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("niche", niche)
            .with("region", region)
            .with("budget", budget);
        self.invoke("influencer_partnership", &params).await
    }

    pub async fn generate_crisis_management_plan(
        &self,
        business_name: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new().with("business_name", business_name);
        self.invoke("crisis_management", &params).await
    }

    pub async fn generate_partnership_strategy(
        &self,
        potential_partners: &[&str],
        service_area: &str,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("potential_partners", potential_partners)
            .with("service_area", service_area);
        self.invoke("partnership_strategy", &params).await
    }

    /// `repeat_rate` is a ratio in `[0, 1]`, rendered as a percentage.
    pub async fn create_retention_marketing_strategy(
        &self,
        average_customer_lifetime_months: u32,
        repeat_rate: f64,
    ) -> StrategyResult<GenerationResult> {
        let params = ParameterSet::new()
            .with("average_customer_lifetime", average_customer_lifetime_months)
            .with("repeat_rate", repeat_rate);
        self.invoke("retention_marketing", &params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::backends::mock::MockBackend;
    use crate::domain::errors::StrategyError;

    use super::*;

    fn dispatcher() -> (Arc<MockBackend>, StrategyDispatcher) {
        let backend = Arc::new(MockBackend::new());
        let dispatcher = StrategyDispatcher::new(backend.clone(), "claude-test").unwrap();
        (backend, dispatcher)
    }

    #[tokio::test]
    async fn test_marketing_strategy_from_profile() {
        let (backend, dispatcher) = dispatcher();
        let profile = AgentConfiguration::independent_detailer();
        dispatcher.generate_marketing_strategy(&profile).await.unwrap();

        let request = &backend.requests()[0];
        assert_eq!(request.max_tokens, 2000);
        assert!(request.messages[0].content.contains(&profile.business_name));
    }

    #[tokio::test]
    async fn test_social_media_default_post_count() {
        let (backend, dispatcher) = dispatcher();
        dispatcher
            .create_social_media_content("Ceramic Coating", None)
            .await
            .unwrap();
        dispatcher
            .create_social_media_content("Ceramic Coating", Some(3))
            .await
            .unwrap();

        let requests = backend.requests();
        assert!(requests[0].messages[0].content.contains("Create 5 "));
        assert!(requests[1].messages[0].content.contains("Create 3 "));
    }

    #[tokio::test]
    async fn test_retention_rate_out_of_range() {
        let (backend, dispatcher) = dispatcher();
        let err = dispatcher
            .create_retention_marketing_strategy(24, 1.5)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StrategyError::InvalidParameter { ref parameter, .. } if parameter == "repeat_rate"
        ));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_every_typed_operation_hits_its_capability() {
        let (backend, dispatcher) = dispatcher();
        dispatcher.generate_email_campaign("lapsed", "win-back").await.unwrap();
        dispatcher.analyze_competitor("Rival", "Austin, TX").await.unwrap();
        dispatcher
            .generate_referral_program(BusinessType::Independent, "premium")
            .await
            .unwrap();
        dispatcher
            .generate_pricing_strategy("small", "premium", "Austin, TX")
            .await
            .unwrap();
        dispatcher
            .generate_local_seo_strategy("Shine", "Austin, TX", 4.8)
            .await
            .unwrap();
        dispatcher
            .create_video_marketing_strategy(BusinessType::Franchise, 1500.0)
            .await
            .unwrap();
        dispatcher
            .create_fleet_marketing_strategy(&["Taxi Services"], "Austin, TX")
            .await
            .unwrap();
        dispatcher
            .create_influencer_partnership_plan("car enthusiasts", "Austin, TX", 800.0)
            .await
            .unwrap();
        dispatcher.generate_crisis_management_plan("Shine").await.unwrap();
        dispatcher
            .generate_partnership_strategy(&["Body shops", "Dealerships"], "Austin, TX")
            .await
            .unwrap();
        dispatcher
            .create_retention_marketing_strategy(24, 0.45)
            .await
            .unwrap();

        let ceilings: Vec<u32> = backend.requests().iter().map(|r| r.max_tokens).collect();
        assert_eq!(
            ceilings,
            vec![1800, 1200, 1400, 1400, 1600, 2000, 1800, 1600, 1500, 1700, 1600]
        );
    }
}
