//! `presets`: the built-in example business profiles.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AgentConfiguration;

#[derive(Debug, Serialize)]
pub struct PresetEntry {
    pub name: &'static str,
    pub profile: AgentConfiguration,
}

#[derive(Debug, Serialize)]
pub struct PresetListOutput {
    pub presets: Vec<PresetEntry>,
}

impl CommandOutput for PresetListOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for entry in &self.presets {
            let profile = &entry.profile;
            lines.push(format!("{} ({})", console::style(entry.name).bold(), profile.business_name));
            lines.push(format!("  Type: {}", profile.business_type));
            lines.push(format!("  Service area: {}", profile.service_area));
            lines.push(format!("  Monthly budget: ${}", profile.monthly_budget));
            lines.push(format!("  Channels: {}", profile.channels.enabled().join(", ")));
            lines.push(format!("  Goals: {}", profile.goals.join("; ")));
            lines.push(String::new());
        }
        lines.join("\n").trim_end().to_string()
    }
}

pub fn list_presets() -> PresetListOutput {
    PresetListOutput {
        presets: AgentConfiguration::PRESETS
            .iter()
            .filter_map(|&name| {
                AgentConfiguration::preset(name).map(|profile| PresetEntry { name, profile })
            })
            .collect(),
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    output(&list_presets(), json_mode);
    Ok(())
}
