//! CLI command implementations.

pub mod capabilities;
pub mod generate;
pub mod plan;
pub mod presets;
pub mod render;
pub mod show;

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::backends::{AnthropicBackend, MockBackend};
use crate::domain::errors::StrategyError;
use crate::domain::models::{
    AgentConfiguration, BackendConfig, BackendProvider, CapabilitySpec, Config, ParamValue,
    ParameterSet,
};
use crate::domain::ports::GenerationBackend;
use crate::services::StrategyDispatcher;

/// Where business-profile parameters come from.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Built-in example profile (independent, franchise, dealership)
    #[arg(long, conflicts_with = "profile")]
    pub preset: Option<String>,

    /// YAML file describing the business
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
}

impl ProfileArgs {
    pub fn load(&self) -> Result<Option<AgentConfiguration>> {
        if let Some(name) = &self.preset {
            return AgentConfiguration::preset(name).map(Some).with_context(|| {
                format!(
                    "Unknown preset '{name}'. Available: {}",
                    AgentConfiguration::PRESETS.join(", ")
                )
            });
        }
        if let Some(path) = &self.profile {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?;
            let profile = serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse profile {}", path.display()))?;
            return Ok(Some(profile));
        }
        Ok(None)
    }
}

/// A capability name plus its parameters.
#[derive(Args, Debug, Clone)]
pub struct InvocationArgs {
    /// Capability name (see `capabilities`)
    pub capability: String,

    /// Parameter as KEY=VALUE; lists are comma-separated. Repeatable.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Split `key=value`, trimming the key.
pub fn parse_param_arg(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid parameter '{raw}': expected KEY=VALUE");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid parameter '{raw}': empty key");
    }
    Ok((key.to_string(), value.to_string()))
}

/// Profile parameters overlaid with explicit `--param` values.
///
/// Raw values are parsed according to the declared kind; undeclared keys are
/// passed through as text and dropped at binding time.
pub fn collect_parameters(spec: &CapabilitySpec, args: &InvocationArgs) -> Result<ParameterSet> {
    let base = args
        .profile
        .load()?
        .map(|profile| profile.parameters())
        .unwrap_or_default();

    let mut overrides = ParameterSet::new();
    for raw in &args.params {
        let (key, value) = parse_param_arg(raw)?;
        let parsed = match spec.param(&key) {
            Some(param) => param
                .kind
                .parse(&value)
                .map_err(|reason| StrategyError::InvalidParameter {
                    capability: spec.name.to_string(),
                    parameter: key.clone(),
                    reason,
                })?,
            None => ParamValue::Text(value),
        };
        overrides.insert(key, parsed);
    }
    Ok(base.merge(overrides))
}

pub fn build_backend(config: &BackendConfig) -> Result<Arc<dyn GenerationBackend>> {
    match config.provider {
        BackendProvider::Anthropic => {
            let backend = AnthropicBackend::from_config(config)
                .context("Failed to set up the Anthropic backend")?;
            Ok(Arc::new(backend))
        }
        BackendProvider::Mock => Ok(Arc::new(MockBackend::new())),
    }
}

pub fn build_dispatcher(config: &Config) -> Result<StrategyDispatcher> {
    let backend = build_backend(&config.backend)?;
    StrategyDispatcher::new(backend, config.backend.model.clone())
        .context("Built-in capability catalog is inconsistent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::strategy_templates::{FLEET_MARKETING, LOCAL_SEO};

    fn invocation(capability: &str, params: &[&str]) -> InvocationArgs {
        InvocationArgs {
            capability: capability.to_string(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
            profile: ProfileArgs::default(),
        }
    }

    #[test]
    fn test_parse_param_arg() {
        assert_eq!(
            parse_param_arg("service_area=Austin, TX").unwrap(),
            ("service_area".to_string(), "Austin, TX".to_string())
        );
        assert_eq!(
            parse_param_arg("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_param_arg("no_equals").is_err());
        assert!(parse_param_arg("=value").is_err());
    }

    #[test]
    fn test_collect_parameters_parses_by_kind() {
        let args = invocation(
            "fleet_marketing",
            &["industry_targets=Taxi Services, Logistics", "service_area=Austin, TX"],
        );
        let params = collect_parameters(&FLEET_MARKETING, &args).unwrap();
        assert_eq!(
            params.get("industry_targets"),
            Some(&ParamValue::List(vec![
                "Taxi Services".to_string(),
                "Logistics".to_string()
            ]))
        );
        // Text parameters keep their commas.
        assert_eq!(
            params.get("service_area"),
            Some(&ParamValue::Text("Austin, TX".to_string()))
        );
    }

    #[test]
    fn test_collect_parameters_rejects_bad_number() {
        let args = invocation("local_seo", &["google_rating=excellent"]);
        let err = collect_parameters(&LOCAL_SEO, &args).unwrap_err();
        let strategy = err.downcast_ref::<StrategyError>().unwrap();
        assert!(matches!(
            strategy,
            StrategyError::InvalidParameter { parameter, .. } if parameter == "google_rating"
        ));
    }

    #[test]
    fn test_explicit_params_override_preset() {
        let mut args = invocation("local_seo", &["service_area=Austin, TX", "google_rating=4.8"]);
        args.profile.preset = Some("independent".to_string());
        let params = collect_parameters(&LOCAL_SEO, &args).unwrap();
        assert_eq!(
            params.get("business_name"),
            Some(&ParamValue::Text("Independent Detailer".to_string()))
        );
        assert_eq!(
            params.get("service_area"),
            Some(&ParamValue::Text("Austin, TX".to_string()))
        );
    }

    #[test]
    fn test_unknown_preset() {
        let profile = ProfileArgs {
            preset: Some("mobile".to_string()),
            profile: None,
        };
        assert!(profile.load().is_err());
    }
}
