//! Metrics collector - thread-safe collection with latency tracking

use super::types::TestMetrics;
use hdrhistogram::Histogram;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

#[derive(Clone)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<TestMetrics>>,
    journey_latencies: Arc<RwLock<Histogram<u64>>>,
    request_latencies: Arc<RwLock<BTreeMap<String, Histogram<u64>>>>,
    system: Arc<RwLock<System>>,
    start_time: Instant,
}

impl MetricsCollector {
    pub fn new() -> Self {
        // Create histogram with 3 significant digits of precision
        let journey_hist = Histogram::new(3).expect("Failed to create journey histogram");

        // Initialize system monitor
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            metrics: Arc::new(RwLock::new(TestMetrics::default())),
            journey_latencies: Arc::new(RwLock::new(journey_hist)),
            request_latencies: Arc::new(RwLock::new(BTreeMap::new())),
            system: Arc::new(RwLock::new(system)),
            start_time: Instant::now(),
        }
    }

    pub fn journey_started(&self) {
        let mut metrics = self.metrics.write();
        metrics.journey.started += 1;
        metrics.journey.in_flight += 1;
    }

    pub fn journey_completed(&self, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        metrics.journey.completed += 1;
        metrics.journey.in_flight = metrics.journey.in_flight.saturating_sub(1);
        drop(metrics);

        // Record latency
        if let Some(mut hist) = self.journey_latencies.try_write() {
            let _ = hist.record(duration_ms);
        }
    }

    pub fn journey_failed(&self, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        metrics.journey.failed += 1;
        metrics.journey.in_flight = metrics.journey.in_flight.saturating_sub(1);
        drop(metrics);

        // Still record latency for failed journeys
        if let Some(mut hist) = self.journey_latencies.try_write() {
            let _ = hist.record(duration_ms);
        }
    }

    pub fn request_succeeded(&self, name: &str, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        metrics.requests.entry(name.to_string()).or_default().success += 1;
        drop(metrics);

        self.record_request_latency(name, duration_ms);
    }

    pub fn request_failed(&self, name: &str, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        metrics.requests.entry(name.to_string()).or_default().failed += 1;
        drop(metrics);

        // Still record latency for failed requests
        self.record_request_latency(name, duration_ms);
    }

    fn record_request_latency(&self, name: &str, duration_ms: u64) {
        let mut latencies = self.request_latencies.write();
        let hist = latencies
            .entry(name.to_string())
            .or_insert_with(|| Histogram::new(3).expect("Failed to create request histogram"));
        let _ = hist.record(duration_ms);
    }

    /// Update system metrics (CPU, memory)
    pub fn update_system_metrics(&self) {
        let mut system = self.system.write();
        system.refresh_cpu_all();
        system.refresh_memory();

        let mut metrics = self.metrics.write();

        // Get global CPU usage
        metrics.system.cpu_usage = system.global_cpu_usage();

        // Get memory usage
        metrics.system.memory_used_mb = system.used_memory() / 1024 / 1024;
        metrics.system.memory_total_mb = system.total_memory() / 1024 / 1024;
    }

    pub fn get_snapshot(&self) -> TestMetrics {
        self.metrics.read().clone()
    }

    pub fn get_journey_latency_percentiles(&self) -> LatencyStats {
        let hist = self.journey_latencies.read();
        LatencyStats::from_histogram(&hist)
    }

    pub fn get_request_latency_percentiles(&self, name: &str) -> Option<LatencyStats> {
        let latencies = self.request_latencies.read();
        latencies.get(name).map(LatencyStats::from_histogram)
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct LatencyStats {
    pub min: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
    pub mean: f64,
    pub count: u64,
}

impl LatencyStats {
    fn from_histogram(hist: &Histogram<u64>) -> Self {
        Self {
            min: hist.min(),
            p50: hist.value_at_quantile(0.50),
            p95: hist.value_at_quantile(0.95),
            p99: hist.value_at_quantile(0.99),
            max: hist.max(),
            mean: hist.mean(),
            count: hist.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_counters_track_in_flight() {
        let collector = MetricsCollector::new();
        collector.journey_started();
        collector.journey_started();

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.journey.started, 2);
        assert_eq!(snapshot.journey.in_flight, 2);

        collector.journey_completed(120);
        collector.journey_failed(45);

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.journey.completed, 1);
        assert_eq!(snapshot.journey.failed, 1);
        assert_eq!(snapshot.journey.in_flight, 0);

        let stats = collector.get_journey_latency_percentiles();
        assert_eq!(stats.count, 2);
        assert!(stats.max >= 120);
    }

    #[test]
    fn requests_are_counted_per_name() {
        let collector = MetricsCollector::new();
        collector.request_succeeded("POST /teams", 10);
        collector.request_succeeded("POST /teams", 20);
        collector.request_failed("POST /teams", 30);
        collector.request_succeeded("GET /tournaments/{id}", 5);

        let snapshot = collector.get_snapshot();
        let teams = &snapshot.requests["POST /teams"];
        assert_eq!(teams.success, 2);
        assert_eq!(teams.failed, 1);
        assert_eq!(teams.total(), 3);
        assert_eq!(snapshot.requests["GET /tournaments/{id}"].success, 1);

        let stats = collector
            .get_request_latency_percentiles("POST /teams")
            .unwrap();
        assert_eq!(stats.count, 3);

        assert!(collector.get_request_latency_percentiles("nope").is_none());
    }
}
