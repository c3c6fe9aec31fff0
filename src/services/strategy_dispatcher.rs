//! Capability dispatch: lookup, render, one backend round trip.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{CatalogError, StrategyError, StrategyResult};
use crate::domain::models::{GenerationResult, KnowledgeBase, ParameterSet, RenderedRequest};
use crate::domain::ports::{BackendMessage, BackendRequest, GenerationBackend};
use crate::services::capability_catalog::CapabilityCatalog;
use crate::services::template_renderer::TemplateRenderer;

/// Turns capability invocations into backend requests.
///
/// The backend handle and model identifier are fixed at construction. The
/// dispatcher keeps no per-call state, so one instance (or an `Arc` of it)
/// can serve any number of concurrent invocations.
#[derive(Clone)]
pub struct StrategyDispatcher {
    backend: Arc<dyn GenerationBackend>,
    model: String,
    catalog: Arc<CapabilityCatalog>,
    renderer: TemplateRenderer,
}

impl std::fmt::Debug for StrategyDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyDispatcher")
            .field("backend", &self.backend.name())
            .field("model", &self.model)
            .field("capabilities", &self.catalog.len())
            .finish()
    }
}

impl StrategyDispatcher {
    /// Dispatcher over the built-in detailing catalog and knowledge base.
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        model: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(
            backend,
            model,
            CapabilityCatalog::builtin()?,
            KnowledgeBase::detailing(),
        ))
    }

    pub fn with_catalog(
        backend: Arc<dyn GenerationBackend>,
        model: impl Into<String>,
        catalog: CapabilityCatalog,
        knowledge: KnowledgeBase,
    ) -> Self {
        Self {
            backend,
            model: model.into(),
            catalog: Arc::new(catalog),
            renderer: TemplateRenderer::new(knowledge),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Look up and render a capability without contacting the backend.
    pub fn render(&self, capability: &str, params: &ParameterSet) -> StrategyResult<RenderedRequest> {
        let spec = self.catalog.lookup(capability)?;
        let bound = spec.bind(params)?;
        self.renderer.render(spec, &bound)
    }

    /// Run one capability end to end and return the backend's text unmodified.
    #[instrument(
        skip(self, params),
        fields(model = %self.model, invocation_id = tracing::field::Empty)
    )]
    pub async fn invoke(
        &self,
        capability: &str,
        params: &ParameterSet,
    ) -> StrategyResult<GenerationResult> {
        let invocation_id = Uuid::new_v4();
        tracing::Span::current().record("invocation_id", tracing::field::display(invocation_id));

        let rendered = self.render(capability, params).inspect_err(|err| {
            debug!(stage = %err.stage(), error = %err, "Invocation rejected before dispatch");
        })?;

        debug!(
            max_tokens = rendered.max_tokens,
            prompt_chars = rendered.text.chars().count(),
            backend = self.backend.name(),
            "Dispatching capability request"
        );

        let request = BackendRequest {
            model: self.model.clone(),
            max_tokens: rendered.max_tokens,
            messages: vec![BackendMessage::user(rendered.text)],
        };

        let response = self.backend.generate(request).await.map_err(|err| {
            warn!(error = %err, "Backend call failed");
            StrategyError::from(err)
        })?;

        let text = response
            .primary_text()
            .map_err(|err| {
                warn!(error = %err, "Backend response had no usable text");
                StrategyError::from(err)
            })?
            .to_string();

        info!(
            output_chars = text.chars().count(),
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "Capability generated"
        );

        Ok(GenerationResult {
            invocation_id,
            capability: rendered.capability,
            model: self.model.clone(),
            text,
            usage: response.usage,
            generated_at: Utc::now(),
        })
    }
}
