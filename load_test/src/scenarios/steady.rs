//! Steady scenario - maintain a fixed number of concurrent simulated users

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;
use tournament_client::HttpTournamentClient;

use crate::cli::{Cli, SteadyArgs};
use crate::config::profiles;
use crate::metrics::collector::MetricsCollector;
use crate::metrics::reporter;
use crate::scenarios::{journey_config, user_loop};

pub async fn run(cli: Cli, args: SteadyArgs) -> Result<()> {
    tracing::info!("Starting steady scenario");

    let options = profiles::client_options(&cli.client_profile, &cli.base_url);
    let client = Arc::new(HttpTournamentClient::new(options)?);

    // Setup metrics collector
    let collector = MetricsCollector::new();
    let collector_clone = collector.clone();

    // Start periodic metrics reporter
    let report_interval = cli.report_interval;
    tokio::spawn(async move {
        reporter::start_periodic_reporter(collector_clone, report_interval).await;
    });

    let config = journey_config(&cli);
    let deadline = Instant::now() + Duration::from_secs(cli.duration);
    let wait = Duration::from_millis(args.wait_ms);

    tracing::info!("Spawning {} concurrent users", args.users);

    let mut user_handles = Vec::with_capacity(args.users);
    for user in 0..args.users {
        let client = client.clone();
        let collector = collector.clone();
        let config = config.clone();

        user_handles.push(tokio::spawn(async move {
            user_loop(user, client, collector, config, deadline, wait).await;
        }));
    }

    tracing::info!(
        "Load test running, waiting for {} users to finish...",
        user_handles.len()
    );

    // Wait for every user to drain its in-flight journey
    for (idx, handle) in user_handles.into_iter().enumerate() {
        if let Err(e) = handle.await {
            tracing::error!("User task {} panicked: {}", idx, e);
        }
    }

    tracing::info!("All users completed");

    // Print final report
    reporter::print_final_report(&collector);

    Ok(())
}
