//! Smoke scenario - a single user runs a fixed number of journeys, then exits
//!
//! Useful as a functional check of the service before a real load run.
//! Ignores `--duration` and exits non-zero if any journey fails.

use anyhow::Result;
use tokio::time::Instant;
use tournament_client::HttpTournamentClient;

use crate::cli::{Cli, SmokeArgs};
use crate::config::profiles;
use crate::journey;
use crate::metrics::collector::MetricsCollector;
use crate::metrics::reporter;
use crate::scenarios::journey_config;

pub async fn run(cli: Cli, args: SmokeArgs) -> Result<()> {
    tracing::info!("Starting smoke scenario");

    let options = profiles::client_options(&cli.client_profile, &cli.base_url);
    let client = HttpTournamentClient::new(options)?;

    let collector = MetricsCollector::new();
    let config = journey_config(&cli);

    let mut failed = 0usize;
    for iteration in 1..=args.iterations {
        tracing::info!("Journey {}/{}", iteration, args.iterations);

        collector.journey_started();
        let start = Instant::now();

        let outcome = journey::run(&client, &collector, &config).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        if outcome.is_success() {
            collector.journey_completed(duration_ms);
        } else {
            tracing::error!("Journey {} ended without finishing: {:?}", iteration, outcome);
            collector.journey_failed(duration_ms);
            failed += 1;
        }
    }

    // Print final report
    reporter::print_final_report(&collector);

    if failed > 0 {
        anyhow::bail!("{} of {} journeys failed", failed, args.iterations);
    }

    Ok(())
}
