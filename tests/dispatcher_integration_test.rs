mod common;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use proptest::prelude::*;

use common::{mock_dispatcher, seo_params, TEST_MODEL};
use detailing_strategist::adapters::backends::{MockBackend, MockReply};
use detailing_strategist::{
    AgentConfiguration, FailureStage, KnowledgeBase, ParameterSet, StrategyDispatcher,
    StrategyError,
};

#[tokio::test]
async fn test_local_seo_request_shape() {
    common::setup_test_logging();
    let (backend, dispatcher) = mock_dispatcher(MockReply::Text("SEO plan".to_string()));

    let result = dispatcher
        .invoke("local_seo", &seo_params("Shine"))
        .await
        .unwrap();

    assert_eq!(result.text, "SEO plan");
    assert_eq!(result.model, TEST_MODEL);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let prompt = &requests[0].messages[0].content;
    assert_eq!(requests[0].max_tokens, 1600);
    assert!(prompt.starts_with(KnowledgeBase::detailing().text()));
    assert!(prompt.contains("Shine"));
    assert!(prompt.contains("Austin, TX"));
    assert!(prompt.contains("4.8"));
}

#[tokio::test]
async fn test_pre_dispatch_failures_make_no_backend_calls() {
    let (backend, dispatcher) = mock_dispatcher(MockReply::default());

    let unknown = dispatcher
        .invoke("skywriting", &seo_params("Shine"))
        .await
        .unwrap_err();
    assert_eq!(unknown.stage(), FailureStage::Lookup);

    let missing = dispatcher
        .invoke("local_seo", &ParameterSet::new().with("business_name", "Shine"))
        .await
        .unwrap_err();
    assert!(matches!(missing, StrategyError::MissingParameter { .. }));
    assert_eq!(missing.stage(), FailureStage::Render);

    let invalid = dispatcher
        .invoke("local_seo", &seo_params("Shine").with("google_rating", 7.5))
        .await
        .unwrap_err();
    assert!(matches!(invalid, StrategyError::InvalidParameter { .. }));

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_backend_failures_are_classified() {
    let (backend, dispatcher) = mock_dispatcher(MockReply::Empty);
    backend.push_reply(MockReply::Unavailable("connection reset".to_string()));
    backend.push_reply(MockReply::NonText("tool_use".to_string()));

    let unavailable = dispatcher
        .invoke("local_seo", &seo_params("Shine"))
        .await
        .unwrap_err();
    assert!(unavailable.is_retryable());
    assert_eq!(unavailable.stage(), FailureStage::Backend);

    let non_text = dispatcher
        .invoke("local_seo", &seo_params("Shine"))
        .await
        .unwrap_err();
    assert!(matches!(non_text, StrategyError::MalformedBackendResponse(_)));

    let empty = dispatcher
        .invoke("local_seo", &seo_params("Shine"))
        .await
        .unwrap_err();
    assert!(matches!(empty, StrategyError::MalformedBackendResponse(_)));
    assert!(!empty.is_retryable());
}

/// Capability, parameters and the line only that task's prompt may contain.
fn concurrent_case(i: usize, name: &str) -> (&'static str, ParameterSet, String) {
    match i % 3 {
        0 => ("local_seo", seo_params(name), format!("Business Name: {name}\n")),
        1 => (
            "crisis_management",
            ParameterSet::new().with("business_name", name),
            format!("plan for {name}."),
        ),
        _ => (
            "fleet_marketing",
            ParameterSet::new()
                .with("industry_targets", vec![name.to_string()])
                .with("service_area", "Austin, TX"),
            format!("Industries: {name}\n"),
        ),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_invocations_do_not_mix() {
    let backend = Arc::new(
        MockBackend::with_reply(MockReply::Echo).with_latency(Duration::from_millis(5)),
    );
    let dispatcher = Arc::new(StrategyDispatcher::new(backend.clone(), TEST_MODEL).unwrap());

    let names: Vec<String> = (0..24).map(|i| format!("Detailer {i:02}")).collect();
    let handles: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let dispatcher = Arc::clone(&dispatcher);
            let (capability, params, marker) = concurrent_case(i, name);
            tokio::spawn(async move {
                let result = dispatcher.invoke(capability, &params).await;
                (capability, marker, result)
            })
        })
        .collect();

    let outcomes = join_all(handles).await;
    assert_eq!(backend.call_count(), names.len());

    for (name, outcome) in names.iter().zip(outcomes) {
        let (capability, marker, result) = outcome.unwrap();
        let result = result.unwrap();
        assert_eq!(result.capability, capability);
        assert!(result.text.contains(&marker), "{capability} prompt lost {marker:?}");
        for other in names.iter().filter(|other| *other != name) {
            assert!(!result.text.contains(other.as_str()), "{name} prompt contains {other}");
        }
    }
}

#[tokio::test]
async fn test_profile_drives_marketing_strategy() {
    let (backend, dispatcher) = mock_dispatcher(MockReply::Echo);
    let profile = AgentConfiguration::dealership_partner();

    let result = dispatcher.generate_marketing_strategy(&profile).await.unwrap();

    assert_eq!(backend.requests()[0].max_tokens, 2000);
    assert!(result.text.contains("Dealership Partner"));
    assert!(result.text.contains("Monthly Marketing Budget: $3000\n"));
    assert!(result
        .text
        .contains("Increase customer retention, Upsell services, Improve dealership ratings"));
}

proptest! {
    #[test]
    fn prop_rendering_is_deterministic(
        name in "[A-Za-z&' ]{1,30}",
        area in "[A-Za-z, ]{1,30}",
        rating in 0.0_f64..=5.0,
    ) {
        prop_assume!(!name.trim().is_empty() && !area.trim().is_empty());

        let (_, dispatcher) = mock_dispatcher(MockReply::Echo);
        let params = ParameterSet::new()
            .with("business_name", name.as_str())
            .with("service_area", area.as_str())
            .with("google_rating", rating);

        let first = dispatcher.render("local_seo", &params).unwrap();
        let second = dispatcher.render("local_seo", &params).unwrap();
        prop_assert_eq!(&first, &second);

        // The backend sees exactly the rendered text.
        let echoed = tokio_test::block_on(dispatcher.invoke("local_seo", &params)).unwrap();
        prop_assert_eq!(echoed.text, first.text);
    }
}
