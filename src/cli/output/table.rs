//! Table output formatting for CLI commands
//!
//! Renders capability listings, parameter sheets and plan summaries with
//! comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::cli::commands::capabilities::CapabilityRow;
use crate::cli::commands::plan::PlanStepOutput;
use crate::cli::commands::show::ParameterRow;
use crate::cli::output::truncate;

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    pub fn format_capabilities(&self, rows: &[CapabilityRow]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Capability", "Max tokens", "Parameters", "Description"]));

        for row in rows {
            table.add_row(vec![
                self.accent(Cell::new(row.name), Color::Cyan),
                Cell::new(row.max_tokens),
                Cell::new(row.parameters.join(", ")),
                Cell::new(truncate(row.description, 60)),
            ]);
        }

        table.to_string()
    }

    pub fn format_parameters(&self, rows: &[ParameterRow]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Parameter", "Kind", "Required", "Default", "Description"]));

        for row in rows {
            let required = if row.required { "yes" } else { "no" };
            table.add_row(vec![
                self.accent(Cell::new(row.name), Color::Cyan),
                Cell::new(&row.kind),
                Cell::new(required),
                Cell::new(row.default.unwrap_or("-")),
                Cell::new(row.description),
            ]);
        }

        table.to_string()
    }

    pub fn format_plan(&self, steps: &[PlanStepOutput]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Step", "Capability", "Status", "Output"]));

        for step in steps {
            let (status, color) = match &step.error {
                None => ("ok", Color::Green),
                Some(_) => ("failed", Color::Red),
            };
            let detail = match (&step.error, &step.text) {
                (Some(err), _) => truncate(err, 60),
                (None, Some(text)) => format!("{} chars", text.chars().count()),
                (None, None) => "-".to_string(),
            };
            table.add_row(vec![
                Cell::new(step.label),
                Cell::new(step.capability),
                self.accent(Cell::new(status), color),
                Cell::new(detail),
            ]);
        }

        table.to_string()
    }

    fn accent(&self, cell: Cell, color: Color) -> Cell {
        if self.use_colors {
            cell.fg(color)
        } else {
            cell
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if let Some(width) = self.max_width {
            table.set_width(width);
        }
        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

/// Honour `NO_COLOR` and dumb terminals.
fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_capabilities() {
        let rows = vec![CapabilityRow {
            name: "local_seo",
            description: "Local SEO and Google Business Profile strategy",
            max_tokens: 1600,
            parameters: vec!["business_name", "service_area", "google_rating"],
        }];
        let output = TableFormatter::with_config(false, Some(120)).format_capabilities(&rows);
        assert!(output.contains("local_seo"));
        assert!(output.contains("1600"));
        assert!(output.contains("google_rating"));
    }

    #[test]
    fn test_format_plan_marks_failures() {
        let steps = vec![
            PlanStepOutput {
                label: "Local SEO strategy",
                capability: "local_seo",
                text: Some("abc".to_string()),
                error: None,
            },
            PlanStepOutput {
                label: "Email campaign",
                capability: "email_campaign",
                text: None,
                error: Some("Backend unavailable: timeout".to_string()),
            },
        ];
        let output = TableFormatter::with_config(false, Some(120)).format_plan(&steps);
        assert!(output.contains("3 chars"));
        assert!(output.contains("failed"));
        assert!(output.contains("Backend unavailable"));
    }
}
