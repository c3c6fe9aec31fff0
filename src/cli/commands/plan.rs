//! `plan`: run the campaign suite for a business profile concurrently.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::commands::{build_dispatcher, ProfileArgs};
use crate::cli::output::progress::{create_spinner, ProgressBarExt};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AgentConfiguration, Config};
use crate::services::{campaign_suite, PlanReport, StrategyDispatcher};

const RULE_WIDTH: usize = 80;

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Defaults to the `independent` preset
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Only run these capabilities (repeatable)
    #[arg(long, value_name = "CAPABILITY")]
    pub only: Vec<String>,

    /// Write each generated document to DIR/<capability>.md
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct PlanStepOutput {
    pub label: &'static str,
    pub capability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub business_name: String,
    pub model: String,
    pub succeeded: usize,
    pub failed: usize,
    pub steps: Vec<PlanStepOutput>,
}

impl PlanOutput {
    fn from_report(profile: &AgentConfiguration, model: &str, report: PlanReport) -> Self {
        Self {
            business_name: profile.business_name.clone(),
            model: model.to_string(),
            succeeded: report.succeeded(),
            failed: report.failed(),
            steps: report
                .outcomes
                .into_iter()
                .map(|outcome| {
                    let (text, error) = match outcome.result {
                        Ok(result) => (Some(result.text), None),
                        Err(err) => (None, Some(err.to_string())),
                    };
                    PlanStepOutput {
                        label: outcome.step.label,
                        capability: outcome.step.capability,
                        text,
                        error,
                    }
                })
                .collect(),
        }
    }
}

impl CommandOutput for PlanOutput {
    fn to_human(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut sections = vec![
            rule.clone(),
            format!("Campaign plan for: {}", self.business_name),
            rule.clone(),
        ];

        for step in &self.steps {
            if let Some(text) = &step.text {
                let heading = step.label.to_uppercase();
                sections.push(format!("\n{heading}\n{}\n{text}\n", "-".repeat(RULE_WIDTH)));
                sections.push(rule.clone());
            }
        }

        sections.push(format!(
            "\n{} succeeded, {} failed",
            self.succeeded, self.failed
        ));
        sections.push(TableFormatter::new().format_plan(&self.steps));
        sections.join("\n")
    }
}

pub async fn run(
    dispatcher: &StrategyDispatcher,
    args: &PlanArgs,
    show_progress: bool,
) -> Result<PlanOutput> {
    let profile = args
        .profile
        .load()?
        .unwrap_or_else(AgentConfiguration::independent_detailer);

    let mut steps = campaign_suite(&profile);
    if !args.only.is_empty() {
        for name in &args.only {
            dispatcher.catalog().lookup(name)?;
        }
        steps.retain(|step| args.only.iter().any(|name| name == step.capability));
        if steps.is_empty() {
            bail!("None of the requested capabilities are part of the campaign plan");
        }
    }

    let spinner = create_spinner(
        format!("Generating {} documents for {}", steps.len(), profile.business_name),
        !show_progress,
    );
    let report = dispatcher.run_plan(steps).await;
    if report.failed() == 0 {
        spinner.finish_success(format!("{} documents generated", report.succeeded()));
    } else {
        spinner.finish_error(format!("{} of {} failed", report.failed(), report.outcomes.len()));
    }

    let plan = PlanOutput::from_report(&profile, dispatcher.model(), report);

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for step in &plan.steps {
            if let Some(text) = &step.text {
                let path = dir.join(format!("{}.md", step.capability));
                std::fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
    }

    Ok(plan)
}

pub async fn execute(args: PlanArgs, config: &Config, json_mode: bool) -> Result<()> {
    let dispatcher = build_dispatcher(config)?;
    let plan = run(&dispatcher, &args, !json_mode).await?;
    let all_failed = plan.succeeded == 0;
    output(&plan, json_mode);
    if all_failed {
        bail!("Every step of the campaign plan failed");
    }
    Ok(())
}
