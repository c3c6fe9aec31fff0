//! `capabilities`: list the catalog.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::CapabilitySpec;
use crate::services::CapabilityCatalog;

#[derive(Debug, Serialize)]
pub struct CapabilityRow {
    pub name: &'static str,
    pub description: &'static str,
    pub max_tokens: u32,
    pub parameters: Vec<&'static str>,
}

impl From<&CapabilitySpec> for CapabilityRow {
    fn from(spec: &CapabilitySpec) -> Self {
        Self {
            name: spec.name,
            description: spec.description,
            max_tokens: spec.max_tokens,
            parameters: spec.params.iter().map(|p| p.name).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CapabilityListOutput {
    pub capabilities: Vec<CapabilityRow>,
    pub total: usize,
}

impl CommandOutput for CapabilityListOutput {
    fn to_human(&self) -> String {
        format!(
            "{} capabilities:\n{}",
            self.total,
            TableFormatter::new().format_capabilities(&self.capabilities)
        )
    }
}

pub fn list_capabilities(catalog: &CapabilityCatalog) -> CapabilityListOutput {
    let capabilities: Vec<CapabilityRow> = catalog.iter().map(CapabilityRow::from).collect();
    CapabilityListOutput {
        total: capabilities.len(),
        capabilities,
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    let catalog = CapabilityCatalog::builtin().context("Built-in capability catalog is inconsistent")?;
    output(&list_capabilities(&catalog), json_mode);
    Ok(())
}
