//! Per-sub-range scan workers
//!
//! Each worker owns one [`SearchTask`] for its lifetime: a sub-range of the
//! keyspace plus the shared ciphertext and match fragment. The worker tries
//! every key in its sub-range in ascending order and records every match.
//! There is no early termination: more than one key can "accidentally"
//! decrypt to text containing the fragment, and the engine guarantees
//! exhaustive reporting.

use crate::oracle::DecryptionOracle;
use crate::predicate::MatchPredicate;
use crate::progress::{ProgressCounter, ProgressObservation, ProgressObserver};
use crate::range::KeyRange;
use std::time::Instant;
use tracing::debug;

/// The unit of work handed to one worker
///
/// Tasks are created fresh per search invocation and discarded when the
/// owning worker finishes.
#[derive(Debug, Clone, Copy)]
pub struct SearchTask<'a> {
    /// Index of the worker that owns this task
    pub worker_id: usize,
    /// Ciphertext under attack, shared read-only by every worker
    pub ciphertext: &'a [u8],
    /// Known plaintext fragment that identifies a successful decryption
    pub match_fragment: &'a str,
    /// Sub-range of the keyspace this worker owns
    pub range: KeyRange,
    /// Keys between progress observations; `None` disables reporting
    pub progress_interval: Option<u64>,
}

/// What one worker produced from its sub-range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// Index of the worker that produced this report
    pub worker_id: usize,
    /// Keys whose decryption contained the fragment, in ascending order
    pub found: Vec<u64>,
    /// Number of keys tried; always the full sub-range size
    pub keys_searched: u64,
    /// Last key index tried, `None` for an empty sub-range
    pub last_key: Option<u64>,
}

/// Scan every key in the task's sub-range
///
/// Oracle failures count as "not a match" and never abort the scan: a
/// fixed-size keyspace guarantees most trial keys are wrong. The shared
/// `counter` and `observer` only see batched updates every
/// `progress_interval` keys, keeping the hot loop free of synchronization.
pub(crate) fn run_worker<O, P>(
    task: SearchTask<'_>,
    oracle: &O,
    observer: &P,
    counter: &ProgressCounter,
    dispatched: Instant,
) -> WorkerReport
where
    O: DecryptionOracle + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let predicate = MatchPredicate::new(task.match_fragment);
    let mut found = Vec::new();
    let mut last_key = None;
    let mut keys_since_report = 0u64;

    debug!(
        worker_id = task.worker_id,
        range = %task.range,
        "worker scanning sub-range"
    );

    for key in task.range.start..task.range.end {
        match oracle.try_decrypt(key, task.ciphertext) {
            Ok(plaintext) if predicate.matches(&plaintext) => {
                debug!(
                    worker_id = task.worker_id,
                    key = format_args!("{:016x}", key),
                    "candidate key reproduced the known fragment"
                );
                found.push(key);
            }
            // wrong plaintext or malformed decryption: not a match
            Ok(_) | Err(_) => {}
        }

        last_key = Some(key);
        keys_since_report += 1;
        if let Some(interval) = task.progress_interval {
            if keys_since_report == interval {
                counter.record(keys_since_report);
                keys_since_report = 0;
                observer.observe(&ProgressObservation {
                    worker_id: task.worker_id,
                    current_key: key,
                    keys_scanned: counter.snapshot(),
                    elapsed: dispatched.elapsed(),
                });
            }
        }
    }

    counter.record(keys_since_report);

    WorkerReport {
        worker_id: task.worker_id,
        found,
        keys_searched: task.range.len(),
        last_key,
    }
}
