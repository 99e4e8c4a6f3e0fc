use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Containers in this crate are single-threaded, so the cell is neither
/// `Sync` nor shared across threads.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
