use clap::{Args, Parser, Subcommand};

/// Tournament Load Testing Tool
#[derive(Parser, Debug, Clone)]
#[command(name = "load-test")]
#[command(about = "Load testing tool for the tournament management service")]
#[command(version)]
pub struct Cli {
    /// Tournament service base URL
    #[arg(
        long,
        default_value = "http://localhost:8080",
        env = "TOURNAMENT_BASE_URL"
    )]
    pub base_url: String,

    /// Test duration in seconds
    #[arg(long, default_value = "60")]
    pub duration: u64,

    /// Metrics reporting interval in seconds
    #[arg(long, default_value = "5")]
    pub report_interval: u64,

    /// HTTP client configuration profile: dev, standard, stress
    #[arg(long, default_value = "standard")]
    pub client_profile: String,

    /// Pause between pending-match polls in milliseconds
    #[arg(long, default_value = "1000")]
    pub poll_interval_ms: u64,

    /// Give up on a journey whose poll loop exceeds this many seconds
    #[arg(long, default_value = "300")]
    pub max_poll_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub scenario: Scenario,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Scenario {
    /// Maintain a fixed number of concurrent simulated users
    Steady(SteadyArgs),

    /// Ramp users up gradually, then hold until the duration elapses
    Ramp(RampArgs),

    /// Run a fixed number of journeys with a single user, then exit
    Smoke(SmokeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SteadyArgs {
    /// Number of concurrent simulated users
    #[arg(long, default_value = "10")]
    pub users: usize,

    /// Pause between journey iterations in milliseconds
    #[arg(long, default_value = "0")]
    pub wait_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct RampArgs {
    /// Target number of concurrent simulated users
    #[arg(long, default_value = "10")]
    pub users: usize,

    /// Users spawned per second while ramping up
    #[arg(long, default_value = "1.0")]
    pub spawn_rate: f64,

    /// Pause between journey iterations in milliseconds
    #[arg(long, default_value = "0")]
    pub wait_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct SmokeArgs {
    /// Number of complete journeys to run before exiting
    #[arg(long, default_value = "1")]
    pub iterations: usize,
}
