//! In-process operation counters for the cache policies.
//!
//! Compiled behind the `metrics` feature so the default build carries no
//! counter writes. Recording is split by mutability: mutating cache
//! operations bump plain `u64` fields through `&mut self`, while read-path
//! operations (`peek_*`, `frequency`) go through [`cell::MetricsCell`].
//! Snapshots ([`snapshot`]) are plain `Copy` structs for tests, benches,
//! and callers that want to log hit rates themselves — publishing to an
//! external monitoring system is out of scope for this crate.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;

pub use metrics_impl::{LfuMetrics, LruMetrics};
pub use snapshot::{LfuMetricsSnapshot, LruMetricsSnapshot};
