//! Progress accounting for long scans
//!
//! Workers report progress every `progress_interval_keys` candidates: the
//! batch is added to a shared [`ProgressCounter`] and a
//! [`ProgressObservation`] is handed to the configured observer. Progress is
//! purely observational; disabling it never changes search results.
//!
//! The counter is the one piece of state shared across worker threads. It is
//! a single lock-free atomic with increment and snapshot-read: every
//! increment is eventually observed by a concurrent reader and no increment
//! is lost.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Thread-safe count of keys scanned across all workers of a search
#[derive(Debug, Default)]
pub struct ProgressCounter {
    keys_scanned: AtomicU64,
}

impl ProgressCounter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of scanned keys to the running total
    pub fn record(&self, keys: u64) {
        self.keys_scanned.fetch_add(keys, Ordering::Relaxed);
    }

    /// Snapshot the running total
    pub fn snapshot(&self) -> u64 {
        self.keys_scanned.load(Ordering::Relaxed)
    }
}

/// One periodic progress report from a worker mid-scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressObservation {
    /// Index of the reporting worker
    pub worker_id: usize,
    /// Key the worker had just finished trying
    pub current_key: u64,
    /// Keys scanned so far across all workers, snapshot at report time
    pub keys_scanned: u64,
    /// Wall-clock time since the search was dispatched
    pub elapsed: Duration,
}

/// Sink for periodic progress observations
///
/// Implementations must be `Sync`: observations arrive concurrently from
/// every worker thread. Formatting and printing are the observer's concern;
/// the engine only emits structured data.
pub trait ProgressObserver: Sync {
    fn observe(&self, observation: &ProgressObservation);
}

/// Default observer: forwards observations to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressObserver;

impl ProgressObserver for LogProgressObserver {
    fn observe(&self, observation: &ProgressObservation) {
        debug!(
            worker_id = observation.worker_id,
            current_key = observation.current_key,
            keys_scanned = observation.keys_scanned,
            elapsed_ms = observation.elapsed.as_millis() as u64,
            "keyspace scan progress"
        );
    }
}
