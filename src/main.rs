//! Detailing Strategist CLI entry point.

use anyhow::Context;
use clap::Parser;

use detailing_strategist::cli::commands;
use detailing_strategist::cli::{handle_error, Cli, Commands};
use detailing_strategist::infrastructure::config::ConfigLoader;
use detailing_strategist::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };
    if let Some(level) = cli.verbosity_level() {
        config.logging.level = level.to_string();
    }

    let _logger = match LoggerImpl::init(&config.logging).context("Failed to initialize logging") {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Capabilities => commands::capabilities::execute(cli.json),
        Commands::Show(args) => commands::show::execute(args, cli.json),
        Commands::Render(args) => commands::render::execute(args, cli.json),
        Commands::Generate(args) => commands::generate::execute(args, &config, cli.json).await,
        Commands::Plan(args) => commands::plan::execute(args, &config, cli.json).await,
        Commands::Presets => commands::presets::execute(cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
