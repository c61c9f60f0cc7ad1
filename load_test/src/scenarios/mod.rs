// Scenarios module
// Contains load test scenario implementations

pub mod ramp;
pub mod smoke;
pub mod steady;

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tournament_client::HttpTournamentClient;

use crate::cli::Cli;
use crate::journey::{self, JourneyConfig};
use crate::metrics::collector::MetricsCollector;

/// Journey pacing derived from the top-level CLI flags.
pub(crate) fn journey_config(cli: &Cli) -> JourneyConfig {
    JourneyConfig {
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
        max_poll: Duration::from_secs(cli.max_poll_secs),
    }
}

/// One simulated user: run journeys back to back until the deadline.
///
/// The deadline is only checked between journeys; an iteration that is
/// already under way runs to its own completion or poll bound.
pub(crate) async fn user_loop(
    user: usize,
    client: Arc<HttpTournamentClient>,
    collector: MetricsCollector,
    config: JourneyConfig,
    deadline: Instant,
    wait: Duration,
) {
    let mut iteration = 0usize;
    while Instant::now() < deadline {
        iteration += 1;

        // Record journey start
        collector.journey_started();
        let start = Instant::now();

        let outcome = journey::run(client.as_ref(), &collector, &config).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        if outcome.is_success() {
            collector.journey_completed(duration_ms);
        } else {
            tracing::warn!(
                "User {} journey {} ended without finishing: {:?}",
                user,
                iteration,
                outcome
            );
            collector.journey_failed(duration_ms);
        }

        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }

    tracing::debug!("User {} finished after {} journeys", user, iteration);
}
