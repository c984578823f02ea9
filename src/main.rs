//! Wayfinder - trip-planning workflow
//!
//! CLI entry point for running the interactive planning session.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use wayfinder::api::HttpTravelApi;
use wayfinder::cli::{Cli, Command};
use wayfinder::config::Config;
use wayfinder::domain::TripRequest;
use wayfinder::media::MediaResolver;
use wayfinder::session::PlannerSession;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wayfinder")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("wayfinder.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!("Wayfinder loaded config: base-url={}", config.api.base_url);

    // Dispatch command
    match cli.command {
        Some(Command::Plan {
            source,
            destination,
            departure_date,
            return_date,
            budget,
            description,
        }) => {
            let seed = TripRequest::builder()
                .source(source.unwrap_or_default())
                .destination(destination.unwrap_or_default())
                .departure_date(departure_date)
                .return_date(return_date)
                .budget(budget.unwrap_or_default())
                .description(description.unwrap_or_default())
                .build();
            cmd_plan(&config, seed).await
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Run the interactive trip-planning workflow
async fn cmd_plan(config: &Config, seed: TripRequest) -> Result<()> {
    let api = HttpTravelApi::from_config(&config.api).context("Failed to create travel service client")?;
    let media = MediaResolver::from_config(&config.media);

    let mut session = PlannerSession::new(Arc::new(api), media);
    session.run(seed).await
}
