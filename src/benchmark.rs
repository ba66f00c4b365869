//! Parallel-efficiency benchmarking sweeps
//!
//! Two measurement modes characterize how the engine scales:
//!
//! - **speedup**: fixed keyspace, worker counts `1..=max`. Measures how
//!   much adding workers shortens a fixed problem.
//! - **scaleup**: keyspace grows proportionally with the worker count, so
//!   per-worker work is constant. Measures whether elapsed time stays flat
//!   as the problem and the workers grow together.
//!
//! Sweeps run their constituent searches strictly sequentially: one
//! iteration's workers fully join before the next iteration's workers are
//! spawned, keeping per-iteration timing uncontaminated by residual threads.
//! Each iteration builds a fresh task set; no state is shared across runs.

use crate::coordinator::SearchCoordinator;
use crate::error::KeysweepError;
use crate::oracle::DecryptionOracle;
use crate::range::KeyRange;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Timing and result metrics for one sweep iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Worker count used for this run
    pub worker_count: usize,
    /// Number of keys in this run's keyspace
    pub keyspace_size: u64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Keys the run reported as matches
    pub keys_found: u64,
}

/// Orchestrates repeated searches under speedup/scaleup policies
pub struct BenchmarkRunner<'c, O> {
    coordinator: &'c SearchCoordinator<O>,
}

impl<'c, O: DecryptionOracle> BenchmarkRunner<'c, O> {
    /// Create a runner that measures through `coordinator`
    pub fn new(coordinator: &'c SearchCoordinator<O>) -> Self {
        Self { coordinator }
    }

    /// Fixed-problem sweep: same keyspace, worker counts `1..=max_workers`
    ///
    /// Produces exactly `max_workers` records ordered by increasing worker
    /// count, all with the same `keyspace_size`.
    pub fn speedup(
        &self,
        ciphertext: &[u8],
        match_fragment: &str,
        keyspace_bits: u8,
        max_workers: usize,
    ) -> Result<Vec<BenchmarkRecord>, KeysweepError> {
        let total = KeyRange::of_bits(keyspace_bits)?;
        Self::validate_max_workers(max_workers)?;

        let mut records = Vec::with_capacity(max_workers);
        for worker_count in 1..=max_workers {
            let result =
                self.coordinator
                    .search_range(ciphertext, match_fragment, total, worker_count)?;
            info!(
                mode = "speedup",
                worker_count,
                keyspace = total.len(),
                keys_found = result.found_keys.len(),
                elapsed_ms = result.elapsed.as_millis() as u64,
                "benchmark iteration complete"
            );
            records.push(BenchmarkRecord {
                worker_count,
                keyspace_size: total.len(),
                elapsed: result.elapsed,
                keys_found: result.found_keys.len() as u64,
            });
        }
        Ok(records)
    }

    /// Scaled-problem sweep: keyspace of `w * 2^base_keyspace_bits` keys
    /// for each worker count `w` in `1..=max_workers`
    ///
    /// Work per worker is held constant while total work grows with `w`; the
    /// scaled keyspace is not necessarily a power of two. A true key drawn
    /// from the base range `[0, 2^base)` lies inside every scaled range, so
    /// one ciphertext serves the whole sweep.
    pub fn scaleup(
        &self,
        ciphertext: &[u8],
        match_fragment: &str,
        base_keyspace_bits: u8,
        max_workers: usize,
    ) -> Result<Vec<BenchmarkRecord>, KeysweepError> {
        let base = KeyRange::of_bits(base_keyspace_bits)?;
        Self::validate_max_workers(max_workers)?;
        // reject the widest iteration up front so the sweep fails before
        // any work is dispatched, not at its last run
        base.len().checked_mul(max_workers as u64).ok_or_else(|| {
            KeysweepError::invalid_input(
                "base_keyspace_bits",
                format!(
                    "{} workers x 2^{} keys overflows the 64-bit keyspace",
                    max_workers, base_keyspace_bits
                ),
                "Lower the base keyspace width or the maximum worker count",
            )
        })?;

        let mut records = Vec::with_capacity(max_workers);
        for worker_count in 1..=max_workers {
            let scaled_keys = base.len() * worker_count as u64;
            let total = KeyRange::with_key_count(scaled_keys);
            let result =
                self.coordinator
                    .search_range(ciphertext, match_fragment, total, worker_count)?;
            info!(
                mode = "scaleup",
                worker_count,
                keyspace = scaled_keys,
                keys_found = result.found_keys.len(),
                elapsed_ms = result.elapsed.as_millis() as u64,
                "benchmark iteration complete"
            );
            records.push(BenchmarkRecord {
                worker_count,
                keyspace_size: scaled_keys,
                elapsed: result.elapsed,
                keys_found: result.found_keys.len() as u64,
            });
        }
        Ok(records)
    }

    fn validate_max_workers(max_workers: usize) -> Result<(), KeysweepError> {
        if max_workers == 0 {
            return Err(KeysweepError::invalid_input(
                "max_workers",
                "must be at least 1",
                "Sweep over one or more worker counts",
            ));
        }
        Ok(())
    }
}
