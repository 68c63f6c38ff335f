use std::cell::Cell;

/// Counter cell for metrics recorded on `&self` paths.
///
/// # Safety
/// Only safe when all accesses are externally synchronized. In this crate the
/// cell sits inside a cache core that is either used single-threaded or held
/// behind the concurrent wrapper's lock.
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
        self.0.set(self.0.get() + 1);
    }
}

// SAFETY:
// All access to MetricsCell is externally synchronized (single-threaded core
// or the wrapper's RwLock). Counters are observational only.
unsafe impl Sync for MetricsCell {}
unsafe impl Send for MetricsCell {}
