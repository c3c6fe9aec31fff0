//! Command-line interface.

pub mod commands;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::errors::StrategyError;
use commands::generate::GenerateArgs;
use commands::plan::PlanArgs;
use commands::show::ShowArgs;
use commands::InvocationArgs;

/// Marketing strategy generation for car detailing businesses
#[derive(Parser, Debug)]
#[command(name = "detailing-strategist", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables and text
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (replaces .strategist/config.yaml and local.yaml)
    #[arg(short, long, global = true, value_name = "FILE", env = "STRATEGIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available capabilities
    Capabilities,
    /// Show parameters of one capability
    Show(ShowArgs),
    /// Print the rendered prompt without calling the backend
    Render(InvocationArgs),
    /// Generate one strategy document
    Generate(GenerateArgs),
    /// Generate the full campaign suite for a business profile
    Plan(PlanArgs),
    /// List built-in business profiles
    Presets,
}

impl Cli {
    /// Log level implied by `-v` flags, if any.
    pub fn verbosity_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Print an error (human or JSON) and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let strategy = err.downcast_ref::<StrategyError>();
    let exit_code = match strategy {
        Some(e) if e.stage() != crate::domain::errors::FailureStage::Backend => 2,
        _ => 1,
    };

    if json_mode {
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "stage": strategy.map(|e| e.stage().as_str()),
            "retryable": strategy.map(StrategyError::is_retryable),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
        if strategy.is_some_and(StrategyError::is_retryable) {
            eprintln!("The backend may be temporarily unavailable; try again shortly.");
        }
    }
    std::process::exit(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_with_params() {
        let cli = Cli::try_parse_from([
            "detailing-strategist",
            "--json",
            "generate",
            "local_seo",
            "-p",
            "business_name=Shine",
            "--param",
            "google_rating=4.8",
            "--preset",
            "independent",
            "-o",
            "seo.md",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.invocation.capability, "local_seo");
        assert_eq!(args.invocation.params.len(), 2);
        assert_eq!(args.invocation.profile.preset.as_deref(), Some("independent"));
        assert_eq!(args.output, Some(PathBuf::from("seo.md")));
    }

    #[test]
    fn test_preset_and_profile_conflict() {
        let result = Cli::try_parse_from([
            "detailing-strategist",
            "plan",
            "--preset",
            "franchise",
            "--profile",
            "shop.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["detailing-strategist", "-vv", "capabilities"]).unwrap();
        assert_eq!(cli.verbosity_level(), Some("debug"));
        let cli = Cli::try_parse_from(["detailing-strategist", "presets"]).unwrap();
        assert_eq!(cli.verbosity_level(), None);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
