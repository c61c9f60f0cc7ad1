//! Client options.

use std::time::Duration;

/// Client configuration options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the tournament service, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tournament-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
