use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::PromotionMetricsSnapshot;
use crate::metrics::traits::{
    CoreMetricsRecorder, PromotionMetricsReadRecorder, PromotionMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct PromotionMetrics {
    pub find_calls: u64,
    pub find_hits: u64,
    pub find_misses: u64,
    pub head_hits: u64,
    pub promotions: u64,
    pub promotions_deferred: u64,
    pub scan_steps: u64,
    pub set_calls: u64,
    pub set_new: u64,
    pub set_updates: u64,
    pub merge_calls: u64,
    pub clear_calls: u64,
    pub entry_at_calls: MetricsCell,
    pub access_count_calls: MetricsCell,
}

impl PromotionMetrics {
    /// Copies the counters into a plain snapshot, attaching the `len` gauge.
    pub fn snapshot(&self, len: usize) -> PromotionMetricsSnapshot {
        PromotionMetricsSnapshot {
            find_calls: self.find_calls,
            find_hits: self.find_hits,
            find_misses: self.find_misses,
            head_hits: self.head_hits,
            promotions: self.promotions,
            promotions_deferred: self.promotions_deferred,
            scan_steps: self.scan_steps,
            set_calls: self.set_calls,
            set_new: self.set_new,
            set_updates: self.set_updates,
            merge_calls: self.merge_calls,
            clear_calls: self.clear_calls,
            entry_at_calls: self.entry_at_calls.get(),
            access_count_calls: self.access_count_calls.get(),
            len,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for PromotionMetrics {
    fn record_find_hit(&mut self) {
        self.find_calls += 1;
        self.find_hits += 1;
    }

    fn record_find_miss(&mut self) {
        self.find_calls += 1;
        self.find_misses += 1;
    }

    fn record_set_call(&mut self) {
        self.set_calls += 1;
    }

    fn record_set_new(&mut self) {
        self.set_new += 1;
    }

    fn record_set_update(&mut self) {
        self.set_updates += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl PromotionMetricsRecorder for PromotionMetrics {
    fn record_head_hit(&mut self) {
        self.head_hits += 1;
    }

    fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    fn record_promotion_deferred(&mut self) {
        self.promotions_deferred += 1;
    }

    fn record_scan_steps(&mut self, steps: u64) {
        self.scan_steps += steps;
    }

    fn record_merge_call(&mut self) {
        self.merge_calls += 1;
    }
}

impl PromotionMetricsReadRecorder for &PromotionMetrics {
    fn record_entry_at_call(&self) {
        self.entry_at_calls.incr();
    }

    fn record_access_count_call(&self) {
        self.access_count_calls.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_counters_accumulate() {
        let mut m = PromotionMetrics::default();
        m.record_find_hit();
        m.record_find_hit();
        m.record_find_miss();
        m.record_set_call();
        m.record_set_new();
        m.record_clear();

        let snap = m.snapshot(4);
        assert_eq!(snap.find_calls, 3);
        assert_eq!(snap.find_hits, 2);
        assert_eq!(snap.find_misses, 1);
        assert_eq!(snap.set_calls, 1);
        assert_eq!(snap.set_new, 1);
        assert_eq!(snap.clear_calls, 1);
        assert_eq!(snap.len, 4);
    }

    #[test]
    fn read_recorder_works_through_shared_ref() {
        let m = PromotionMetrics::default();
        (&m).record_entry_at_call();
        (&m).record_access_count_call();
        (&m).record_access_count_call();
        let snap = m.snapshot(0);
        assert_eq!(snap.entry_at_calls, 1);
        assert_eq!(snap.access_count_calls, 2);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut m = PromotionMetrics::default();
        m.record_promotion();
        m.record_scan_steps(9);
        (&m).record_entry_at_call();
        m.reset();
        let snap = m.snapshot(0);
        assert_eq!(snap.promotions, 0);
        assert_eq!(snap.scan_steps, 0);
        assert_eq!(snap.entry_at_calls, 0);
    }
}
