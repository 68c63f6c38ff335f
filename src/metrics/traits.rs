//! Metrics recorder traits.
//!
//! Mirrors the cache trait design: a core recorder for counters every policy
//! shares, an LRU recorder for recency-specific signals, and a read-only
//! variant for cache methods that take `&self` (backed by interior-mutable
//! cells). [`MetricsSnapshotProvider`] decouples snapshot consumers from the
//! concrete cache type.

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Metrics for LRU behavior (recency order).
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Read-only LRU metrics for `&self` methods (uses interior mutability).
///
/// Use this for cache operations that only take `&self` (`peek_lru`,
/// `recency_rank`) where a mutable recorder is not available.
pub trait LruMetricsReadRecorder {
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Bench/test consumption: copy the current counter values out.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
