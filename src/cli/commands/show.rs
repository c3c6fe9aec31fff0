//! `show <capability>`: parameters and template of one capability.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{CapabilitySpec, ParamSpec};
use crate::services::CapabilityCatalog;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Capability name
    pub capability: String,

    /// Also print the raw prompt template
    #[arg(long)]
    pub template: bool,
}

#[derive(Debug, Serialize)]
pub struct ParameterRow {
    pub name: &'static str,
    pub kind: String,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl From<&ParamSpec> for ParameterRow {
    fn from(param: &ParamSpec) -> Self {
        Self {
            name: param.name,
            kind: param.kind.label(),
            required: param.is_required(),
            default: param.default,
            description: param.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CapabilityDetailOutput {
    pub name: &'static str,
    pub description: &'static str,
    pub max_tokens: u32,
    pub parameters: Vec<ParameterRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static str>,
}

impl CapabilityDetailOutput {
    pub fn new(spec: &CapabilitySpec, with_template: bool) -> Self {
        Self {
            name: spec.name,
            description: spec.description,
            max_tokens: spec.max_tokens,
            parameters: spec.params.iter().map(ParameterRow::from).collect(),
            template: with_template.then_some(spec.template),
        }
    }
}

impl CommandOutput for CapabilityDetailOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Capability: {}", self.name),
            format!("Description: {}", self.description),
            format!("Max output tokens: {}", self.max_tokens),
            String::new(),
            TableFormatter::new().format_parameters(&self.parameters),
        ];
        if let Some(template) = self.template {
            lines.push(String::new());
            lines.push("Template:".to_string());
            lines.push(template.to_string());
        }
        lines.join("\n")
    }
}

pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let catalog = CapabilityCatalog::builtin()?;
    let spec = catalog.lookup(&args.capability)?;
    output(&CapabilityDetailOutput::new(spec, args.template), json_mode);
    Ok(())
}
