//! Exports promotion counters in Prometheus text format.
//!
//! Run with `cargo run --example metrics_export --features metrics`.

use freqlist::SelfOrganizingMap;
use freqlist::metrics::exporter::PrometheusTextExporter;
use freqlist::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};

fn main() {
    let mut map = SelfOrganizingMap::new();
    for i in 0..64u32 {
        map.set(i, i * 2);
    }

    // Skewed reads: low keys are hot.
    for round in 0..1_000u32 {
        let key = if round % 10 < 9 { round % 8 } else { round % 64 };
        let _ = map.find(&key);
    }
    let _ = map.find(&1_000);

    let snapshot = map.snapshot();
    println!("hit ratio:       {:.3}", snapshot.hit_ratio());
    println!("avg scan depth:  {:.2}", snapshot.avg_scan_depth());
    println!("promotions:      {}\n", snapshot.promotions);

    let exporter = PrometheusTextExporter::new("freqlist", std::io::stdout());
    exporter.export(&snapshot);
}
