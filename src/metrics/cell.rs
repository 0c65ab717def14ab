use std::cell::Cell;

/// Counter for metrics recorded through `&self` (read-path operations).
///
/// # Safety
/// Not internally synchronized; all access must be externally serialized.
/// The synchronized wrappers hold their mutex across each whole operation,
/// so every recording site is single-threaded in practice.
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
        self.0.set(self.0.get().wrapping_add(1));
    }
}

// SAFETY:
// All access to MetricsCell is externally serialized (see type docs).
// Counters are observational and do not affect cache correctness.
unsafe impl Sync for MetricsCell {}
unsafe impl Send for MetricsCell {}
