//! Operation counters for the LRU policy (feature `metrics`).
//!
//! Recording, snapshotting, and consumption are split into separate pieces:
//! recorders only write counters, [`snapshot::LruMetricsSnapshot`] is a plain
//! copyable view for bench/test consumption, and
//! [`traits::MetricsSnapshotProvider`] decouples consumers from the cache
//! type.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
