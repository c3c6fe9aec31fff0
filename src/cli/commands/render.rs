//! `render <capability>`: print the prompt without calling the backend.

use anyhow::Result;
use serde::Serialize;

use crate::cli::commands::{collect_parameters, InvocationArgs};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{KnowledgeBase, RenderedRequest};
use crate::services::{CapabilityCatalog, TemplateRenderer};

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    #[serde(flatten)]
    pub request: RenderedRequest,
}

impl CommandOutput for RenderOutput {
    fn to_human(&self) -> String {
        self.request.text.clone()
    }
}

pub fn render(args: &InvocationArgs) -> Result<RenderOutput> {
    let catalog = CapabilityCatalog::builtin()?;
    let spec = catalog.lookup(&args.capability)?;
    let params = collect_parameters(spec, args)?;
    let bound = spec.bind(&params)?;
    let request = TemplateRenderer::new(KnowledgeBase::detailing()).render(spec, &bound)?;
    Ok(RenderOutput { request })
}

pub fn execute(args: InvocationArgs, json_mode: bool) -> Result<()> {
    output(&render(&args)?, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::ProfileArgs;
    use crate::domain::errors::StrategyError;

    #[test]
    fn test_render_crisis_plan() {
        let args = InvocationArgs {
            capability: "crisis_management".to_string(),
            params: vec!["business_name=Shine".to_string()],
            profile: ProfileArgs::default(),
        };
        let rendered = render(&args).unwrap();
        assert_eq!(rendered.request.max_tokens, 1500);
        assert!(rendered.to_human().contains("Shine"));
        assert_eq!(rendered.to_json()["capability"], "crisis_management");
    }

    #[test]
    fn test_render_missing_parameter() {
        let args = InvocationArgs {
            capability: "crisis_management".to_string(),
            params: Vec::new(),
            profile: ProfileArgs::default(),
        };
        let err = render(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StrategyError>(),
            Some(StrategyError::MissingParameter { .. })
        ));
    }
}
