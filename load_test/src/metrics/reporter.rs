//! Console reporter for metrics with real-time updates

use super::collector::MetricsCollector;
use std::io::{self, Write};
use tokio::time::{interval, Duration};

/// Start periodic metrics reporting (every N seconds)
pub async fn start_periodic_reporter(collector: MetricsCollector, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;

        // Update system metrics before printing
        collector.update_system_metrics();

        print_live_metrics(&collector);
    }
}

/// Print live metrics (clears screen and updates in place)
pub fn print_live_metrics(collector: &MetricsCollector) {
    // Clear screen and move cursor to top
    print!("\x1B[2J\x1B[1;1H");

    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();
    let journey_latency = collector.get_journey_latency_percentiles();

    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║            Tournament Load Test - Live Metrics                 ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    // Time elapsed
    println!(
        "\n⏱️  Elapsed Time: {:02}:{:02}:{:02}",
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60
    );

    // Journeys
    println!("\n┌─ JOURNEYS ──────────────────────────────────────────────────┐");
    println!(
        "│  Started:      {:>8}    In-Flight:  {:>8}              │",
        metrics.journey.started, metrics.journey.in_flight
    );
    println!(
        "│  Completed:    {:>8}    Failed:     {:>8}              │",
        metrics.journey.completed, metrics.journey.failed
    );

    if metrics.journey.started > 0 {
        let success_rate =
            (metrics.journey.completed as f64 / metrics.journey.started as f64) * 100.0;
        let throughput = if elapsed > 0 {
            metrics.journey.completed as f64 / elapsed as f64
        } else {
            0.0
        };
        println!(
            "│  Success Rate: {:>7.2}%    Throughput: {:>7.2}/sec        │",
            success_rate, throughput
        );
    }
    println!("└─────────────────────────────────────────────────────────────┘");

    // Journey latencies
    if journey_latency.count > 0 {
        println!("\n┌─ JOURNEY LATENCY (ms) ──────────────────────────────────────┐");
        println!(
            "│  Min: {:>6}  P50: {:>6}  P95: {:>6}  P99: {:>6}  Max: {:>6}│",
            journey_latency.min,
            journey_latency.p50,
            journey_latency.p95,
            journey_latency.p99,
            journey_latency.max
        );
        println!(
            "│  Mean: {:>8.2} ms    Count: {:>10}                    │",
            journey_latency.mean, journey_latency.count
        );
        println!("└─────────────────────────────────────────────────────────────┘");
    }

    // Per-request table
    if !metrics.requests.is_empty() {
        println!("\nREQUESTS");
        println!(
            "  {:<52} {:>8} {:>8} {:>7} {:>7} {:>7}",
            "Name", "OK", "Fail", "P50", "P95", "P99"
        );
        for (name, stats) in &metrics.requests {
            let latency = collector.get_request_latency_percentiles(name);
            let (p50, p95, p99) = latency
                .map(|l| (l.p50, l.p95, l.p99))
                .unwrap_or((0, 0, 0));
            println!(
                "  {:<52} {:>8} {:>8} {:>7} {:>7} {:>7}",
                name, stats.success, stats.failed, p50, p95, p99
            );
        }
    }

    // System metrics
    println!("\n┌─ SYSTEM ────────────────────────────────────────────────────┐");
    println!(
        "│  CPU Usage:    {:>6.1}%    Memory: {:>6} / {:>6} MB       │",
        metrics.system.cpu_usage, metrics.system.memory_used_mb, metrics.system.memory_total_mb
    );
    println!("└─────────────────────────────────────────────────────────────┘");

    println!("\n  [Press Ctrl+C to stop test]");

    // Flush stdout to ensure immediate display
    let _ = io::stdout().flush();
}

/// Print final summary report
pub fn print_final_report(collector: &MetricsCollector) {
    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();
    let journey_latency = collector.get_journey_latency_percentiles();

    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                    FINAL TEST REPORT                           ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n📊 JOURNEYS");
    println!("   Total Started:        {:>10}", metrics.journey.started);
    println!("   Total Completed:      {:>10}", metrics.journey.completed);
    println!("   Total Failed:         {:>10}", metrics.journey.failed);

    if elapsed > 0 {
        let throughput = metrics.journey.completed as f64 / elapsed as f64;
        println!("   Throughput:           {:>10.2} journeys/sec", throughput);
    }

    if metrics.journey.started > 0 {
        let success_rate =
            (metrics.journey.completed as f64 / metrics.journey.started as f64) * 100.0;
        println!("   Success Rate:         {:>10.2}%", success_rate);
    }

    if journey_latency.count > 0 {
        println!("\n📈 JOURNEY LATENCY");
        println!("   Min:                  {:>10} ms", journey_latency.min);
        println!("   P50 (Median):         {:>10} ms", journey_latency.p50);
        println!("   P95:                  {:>10} ms", journey_latency.p95);
        println!("   P99:                  {:>10} ms", journey_latency.p99);
        println!("   Max:                  {:>10} ms", journey_latency.max);
        println!("   Mean:                 {:>10.2} ms", journey_latency.mean);
    }

    if !metrics.requests.is_empty() {
        println!("\n🌐 REQUESTS");
        println!(
            "   {:<52} {:>8} {:>8} {:>7} {:>7} {:>7}",
            "Name", "OK", "Fail", "P50", "P95", "P99"
        );
        for (name, stats) in &metrics.requests {
            let latency = collector.get_request_latency_percentiles(name);
            let (p50, p95, p99) = latency
                .map(|l| (l.p50, l.p95, l.p99))
                .unwrap_or((0, 0, 0));
            println!(
                "   {:<52} {:>8} {:>8} {:>7} {:>7} {:>7}",
                name, stats.success, stats.failed, p50, p95, p99
            );
        }

        let total_failed: usize = metrics.requests.values().map(|s| s.failed).sum();
        let total: usize = metrics.requests.values().map(|s| s.total()).sum();
        println!("   Total Requests:       {:>10}", total);
        println!("   Total Failures:       {:>10}", total_failed);
    }

    println!("\n⏱️  Test Duration: {:.2} seconds", elapsed);
    println!("════════════════════════════════════════════════════════════════\n");
}
