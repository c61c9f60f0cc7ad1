use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod journey;
mod metrics;
mod scenarios;

use cli::{Cli, Scenario};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Tournament Load Test Starting...");
    tracing::info!("Base URL: {}", cli.base_url);
    tracing::info!("Client Profile: {}", cli.client_profile);
    tracing::info!("Duration: {}s", cli.duration);

    // Run the selected scenario
    match cli.scenario.clone() {
        Scenario::Steady(args) => {
            tracing::info!("Running Steady scenario");
            tracing::info!("  Users: {}", args.users);
            tracing::info!("  Wait Between Journeys: {}ms", args.wait_ms);
            scenarios::steady::run(cli, args).await?;
        }
        Scenario::Ramp(args) => {
            tracing::info!("Running Ramp scenario");
            tracing::info!("  Target Users: {}", args.users);
            tracing::info!("  Spawn Rate: {}/sec", args.spawn_rate);
            tracing::info!("  Wait Between Journeys: {}ms", args.wait_ms);
            scenarios::ramp::run(cli, args).await?;
        }
        Scenario::Smoke(args) => {
            tracing::info!("Running Smoke scenario");
            tracing::info!("  Iterations: {}", args.iterations);
            scenarios::smoke::run(cli, args).await?;
        }
    }

    tracing::info!("Load test complete");

    Ok(())
}
