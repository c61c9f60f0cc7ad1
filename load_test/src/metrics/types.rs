//! Metric types

use std::collections::BTreeMap;

/// One journey is one complete simulated-user iteration.
#[derive(Debug, Clone, Default)]
pub struct JourneyMetrics {
    pub started: usize,
    pub completed: usize,
    pub failed: usize,
    pub in_flight: usize,
}

/// Counters for one named request, e.g. `POST /teams`.
#[derive(Debug, Clone, Default)]
pub struct RequestStats {
    pub success: usize,
    pub failed: usize,
}

impl RequestStats {
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub cpu_usage: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TestMetrics {
    pub journey: JourneyMetrics,
    pub requests: BTreeMap<String, RequestStats>,
    pub system: SystemMetrics,
}
