//! Fork-join search coordination
//!
//! [`SearchCoordinator`] owns the oracle and the configuration, and runs one
//! exhaustive scan per `search` call: validate arguments, partition the
//! keyspace, spawn one native thread per sub-range, join them all, and
//! aggregate the reports. Workers share no mutable keyspace state (the
//! sub-ranges are disjoint by construction), so the scan itself needs no
//! locking, and aggregation happens strictly after every join.
//!
//! A panicked worker is fatal to the whole call: its sub-range was not
//! covered, and silently dropping it would break the completeness guarantee.

use crate::config::SearchConfig;
use crate::error::KeysweepError;
use crate::oracle::DecryptionOracle;
use crate::progress::{LogProgressObserver, ProgressCounter, ProgressObserver};
use crate::range::KeyRange;
use crate::worker::{run_worker, SearchTask, WorkerReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one exhaustive keyspace scan
///
/// The only artifact a search returns; immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Every key whose decryption contained the fragment, ascending
    pub found_keys: Vec<u64>,
    /// Total keys tried across all workers
    pub keys_searched: u64,
    /// Wall-clock time from dispatch to the last worker's completion
    pub elapsed: Duration,
    /// Number of workers the keyspace was partitioned across
    pub worker_count: usize,
}

/// Partitions a keyspace across worker threads and aggregates their results
///
/// The coordinator guarantees completeness: if the true key lies in the
/// searched range and decrypting with it reproduces plaintext containing the
/// fragment, it appears in [`SearchResult::found_keys`]. There is no
/// sampling and no cancellation: once dispatched, a search runs to
/// completion.
pub struct SearchCoordinator<O> {
    oracle: O,
    config: SearchConfig,
    observer: Arc<dyn ProgressObserver + Send + Sync>,
}

impl<O: DecryptionOracle> SearchCoordinator<O> {
    /// Create a coordinator with the default configuration
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            config: SearchConfig::default(),
            observer: Arc::new(LogProgressObserver),
        }
    }

    /// Create a coordinator with a validated configuration
    pub fn with_config(oracle: O, config: SearchConfig) -> Result<Self, KeysweepError> {
        config.validate()?;
        Ok(Self {
            oracle,
            config,
            observer: Arc::new(LogProgressObserver),
        })
    }

    /// Replace the progress observer
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver + Send + Sync>) -> Self {
        self.observer = observer;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Exhaustively search the full `keyspace_bits`-bit keyspace
    ///
    /// Rejects `keyspace_bits` of 0 or more than 63 and a zero
    /// `worker_count` before any work is dispatched.
    pub fn search(
        &self,
        ciphertext: &[u8],
        match_fragment: &str,
        keyspace_bits: u8,
        worker_count: usize,
    ) -> Result<SearchResult, KeysweepError> {
        let total = KeyRange::of_bits(keyspace_bits)?;
        self.search_range(ciphertext, match_fragment, total, worker_count)
    }

    /// Exhaustively search an arbitrary key range
    ///
    /// The range-shaped entry point exists for scaled-problem benchmarking,
    /// where the keyspace is a worker-count multiple of a base size and not
    /// necessarily a power of two. Semantics are identical to [`search`].
    ///
    /// [`search`]: SearchCoordinator::search
    pub fn search_range(
        &self,
        ciphertext: &[u8],
        match_fragment: &str,
        total: KeyRange,
        worker_count: usize,
    ) -> Result<SearchResult, KeysweepError> {
        if worker_count == 0 {
            return Err(KeysweepError::invalid_input(
                "worker_count",
                "must be at least 1",
                "Request one or more workers to scan the keyspace",
            ));
        }

        let sub_ranges = total.partition(worker_count)?;
        let progress_interval = self
            .config
            .progress_enabled
            .then_some(self.config.progress_interval_keys);
        let counter = ProgressCounter::new();
        let dispatched = Instant::now();

        debug!(
            worker_count,
            keyspace = total.len(),
            range = %total,
            "dispatching keyspace scan"
        );

        let joined: Vec<thread::Result<WorkerReport>> = thread::scope(|scope| {
            let handles: Vec<_> = sub_ranges
                .iter()
                .enumerate()
                .map(|(worker_id, &range)| {
                    let task = SearchTask {
                        worker_id,
                        ciphertext,
                        match_fragment,
                        range,
                        progress_interval,
                    };
                    let oracle = &self.oracle;
                    let observer = &*self.observer;
                    let counter = &counter;
                    scope.spawn(move || run_worker(task, oracle, observer, counter, dispatched))
                })
                .collect();

            // join every handle before surfacing any failure, so a panicked
            // worker cannot leave siblings running past the barrier
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let elapsed = dispatched.elapsed();

        let mut reports = Vec::with_capacity(worker_count);
        for (worker_id, outcome) in joined.into_iter().enumerate() {
            match outcome {
                Ok(report) => reports.push(report),
                Err(_) => return Err(KeysweepError::worker_panicked(worker_id)),
            }
        }

        // sub-ranges are disjoint and ordered, so concatenating per-worker
        // findings in worker order yields a globally ascending sequence
        let mut found_keys = Vec::new();
        let mut keys_searched = 0u64;
        for report in reports {
            keys_searched += report.keys_searched;
            found_keys.extend(report.found);
        }

        info!(
            worker_count,
            keys_searched,
            keys_found = found_keys.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "keyspace scan complete"
        );

        Ok(SearchResult {
            found_keys,
            keys_searched,
            elapsed,
            worker_count,
        })
    }
}
