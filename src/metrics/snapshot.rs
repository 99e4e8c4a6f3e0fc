/// Point-in-time copy of [`PromotionMetrics`](crate::metrics::metrics_impl::PromotionMetrics).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PromotionMetricsSnapshot {
    pub find_calls: u64,
    pub find_hits: u64,
    pub find_misses: u64,

    pub head_hits: u64, // hits on the head node; never counted, never moved
    pub promotions: u64,
    pub promotions_deferred: u64,
    pub scan_steps: u64, // nodes inspected across all scans

    pub set_calls: u64,
    pub set_new: u64,
    pub set_updates: u64,

    pub merge_calls: u64,
    pub clear_calls: u64,

    pub entry_at_calls: u64,
    pub access_count_calls: u64,

    // gauge captured at snapshot time
    pub len: usize,
}

impl PromotionMetricsSnapshot {
    /// Fraction of finds that hit, `0.0` when no find was issued.
    pub fn hit_ratio(&self) -> f64 {
        if self.find_calls == 0 {
            0.0
        } else {
            self.find_hits as f64 / self.find_calls as f64
        }
    }

    /// Average nodes inspected per find or set scan.
    pub fn avg_scan_depth(&self) -> f64 {
        let scans = self.find_calls + self.set_calls;
        if scans == 0 {
            0.0
        } else {
            self.scan_steps as f64 / scans as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_handle_zero_calls() {
        let snap = PromotionMetricsSnapshot::default();
        assert_eq!(snap.hit_ratio(), 0.0);
        assert_eq!(snap.avg_scan_depth(), 0.0);
    }

    #[test]
    fn hit_ratio_and_scan_depth() {
        let snap = PromotionMetricsSnapshot {
            find_calls: 4,
            find_hits: 3,
            set_calls: 4,
            scan_steps: 16,
            ..Default::default()
        };
        assert!((snap.hit_ratio() - 0.75).abs() < f64::EPSILON);
        assert!((snap.avg_scan_depth() - 2.0).abs() < f64::EPSILON);
    }
}
