use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::PromotionMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for promotion metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// directly or forwarded to an OpenTelemetry collector. Write errors are
/// dropped; metrics never fail the caller.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_sample(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_sample("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_sample("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<PromotionMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &PromotionMetricsSnapshot) {
        self.write_counter("find_calls_total", snapshot.find_calls);
        self.write_counter("find_hits_total", snapshot.find_hits);
        self.write_counter("find_misses_total", snapshot.find_misses);
        self.write_counter("head_hits_total", snapshot.head_hits);
        self.write_counter("promotions_total", snapshot.promotions);
        self.write_counter("promotions_deferred_total", snapshot.promotions_deferred);
        self.write_counter("scan_steps_total", snapshot.scan_steps);
        self.write_counter("set_calls_total", snapshot.set_calls);
        self.write_counter("set_new_total", snapshot.set_new);
        self.write_counter("set_updates_total", snapshot.set_updates);
        self.write_counter("merge_calls_total", snapshot.merge_calls);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_counter("entry_at_calls_total", snapshot.entry_at_calls);
        self.write_counter("access_count_calls_total", snapshot.access_count_calls);
        self.write_gauge("len", snapshot.len as u64);
    }
}
