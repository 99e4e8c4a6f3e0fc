//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting, and export are split into small traits so the
//! container logic only ever *writes* counters and monitoring code only ever
//! *reads* them.
//!
//! ```text
//!                 ┌─────────────────────────────┐
//!                 │     CoreMetricsRecorder     │
//!                 │  find hit/miss, set, clear  │
//!                 └──────────────┬──────────────┘
//!                                │
//!                                ▼
//!                 ┌─────────────────────────────┐      ┌──────────────────────────────┐
//!                 │  PromotionMetricsRecorder   │      │ PromotionMetricsReadRecorder │
//!                 │  head hit, promote, defer,  │      │ (&self paths: entry_at,      │
//!                 │  scan steps, merge          │      │  access_count)               │
//!                 └─────────────────────────────┘      └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Common counters for any associative container.
pub trait CoreMetricsRecorder {
    fn record_find_hit(&mut self);
    fn record_find_miss(&mut self);
    fn record_set_call(&mut self);
    fn record_set_new(&mut self);
    fn record_set_update(&mut self);
    fn record_clear(&mut self);
}

/// Metrics for access-count driven promotion.
pub trait PromotionMetricsRecorder: CoreMetricsRecorder {
    /// A lookup matched the head node; nothing was counted or moved.
    fn record_head_hit(&mut self);
    /// A non-head node reached the head's count and was relinked to the front.
    fn record_promotion(&mut self);
    /// A non-head node was counted but stayed in place.
    fn record_promotion_deferred(&mut self);
    /// Nodes inspected by one scan, the matching node included.
    fn record_scan_steps(&mut self, steps: u64);
    fn record_merge_call(&mut self);
}

/// Read-only promotion metrics for &self methods (uses interior mutability).
pub trait PromotionMetricsReadRecorder {
    fn record_entry_at_call(&self);
    fn record_access_count_call(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
