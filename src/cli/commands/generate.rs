//! `generate <capability>`: one backend round trip.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::commands::{build_dispatcher, collect_parameters, InvocationArgs};
use crate::cli::output::progress::{create_spinner, ProgressBarExt};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, GenerationResult};
use crate::services::StrategyDispatcher;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Also write the generated text to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    #[serde(flatten)]
    pub result: GenerationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
}

impl CommandOutput for GenerateOutput {
    fn to_human(&self) -> String {
        match &self.saved_to {
            Some(path) => format!("{}\n\nSaved to {}", self.result.text, path.display()),
            None => self.result.text.clone(),
        }
    }
}

pub async fn generate(
    dispatcher: &StrategyDispatcher,
    args: &GenerateArgs,
    show_progress: bool,
) -> Result<GenerateOutput> {
    let spec = dispatcher.catalog().lookup(&args.invocation.capability)?;
    let params = collect_parameters(spec, &args.invocation)?;

    let spinner = create_spinner(
        format!("Generating {} with {}", spec.name, dispatcher.model()),
        !show_progress,
    );
    let result = match dispatcher.invoke(spec.name, &params).await {
        Ok(result) => {
            spinner.finish_success(format!("{} generated", spec.name));
            result
        }
        Err(err) => {
            spinner.finish_error(format!("{} failed", spec.name));
            return Err(err.into());
        }
    };

    if let Some(path) = &args.output {
        std::fs::write(path, &result.text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(GenerateOutput {
        result,
        saved_to: args.output.clone(),
    })
}

pub async fn execute(args: GenerateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let dispatcher = build_dispatcher(config)?;
    let generated = generate(&dispatcher, &args, !json_mode).await?;
    output(&generated, json_mode);
    Ok(())
}
