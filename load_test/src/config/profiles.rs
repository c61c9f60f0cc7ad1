use std::time::Duration;

use tournament_client::ClientOptions;

/// Get client options by profile name
pub fn client_options(profile: &str, base_url: &str) -> ClientOptions {
    match profile {
        "dev" => development_profile(base_url),
        "standard" => standard_profile(base_url),
        "stress" => stress_profile(base_url),
        _ => {
            eprintln!("Unknown profile '{}', using 'standard' profile", profile);
            standard_profile(base_url)
        }
    }
}

/// Standard profile for load testing
///
/// Balanced settings for typical runs:
/// - 30s request timeout
pub fn standard_profile(base_url: &str) -> ClientOptions {
    ClientOptions {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(30),
        user_agent: user_agent("standard"),
    }
}

/// Development profile for testing and debugging
///
/// Short timeout so a broken local service fails fast:
/// - 5s request timeout
pub fn development_profile(base_url: &str) -> ClientOptions {
    ClientOptions {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
        user_agent: user_agent("dev"),
    }
}

/// Stress profile for extreme load testing
///
/// Long timeout so a saturated service still gets its answers counted
/// instead of being cut off by the client:
/// - 90s request timeout
pub fn stress_profile(base_url: &str) -> ClientOptions {
    ClientOptions {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(90),
        user_agent: user_agent("stress"),
    }
}

fn user_agent(profile: &str) -> String {
    format!("tournament-load-test/{} ({})", env!("CARGO_PKG_VERSION"), profile)
}
