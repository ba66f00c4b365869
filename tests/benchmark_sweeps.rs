//! Speedup and scaleup sweep behavior through the public API

mod common;

use common::{encrypt, XteaOracle};
use keysweep::{BenchmarkRunner, KeysweepError, SearchCoordinator};

const PLAINTEXT: &[u8] = b"benchmark plaintext with TESTFRAG inside";

#[test]
fn speedup_produces_one_record_per_worker_count() -> Result<(), KeysweepError> {
    let ciphertext = encrypt(513, PLAINTEXT);
    let coordinator = SearchCoordinator::new(XteaOracle);
    let runner = BenchmarkRunner::new(&coordinator);

    let records = runner.speedup(&ciphertext, "TESTFRAG", 10, 4)?;

    assert_eq!(records.len(), 4);
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.worker_count, index + 1);
        assert_eq!(record.keyspace_size, 1024);
    }
    Ok(())
}

#[test]
fn speedup_runs_are_independent_and_reproducible() -> Result<(), KeysweepError> {
    // same fixed problem at every worker count: each run must report the
    // same single key
    let ciphertext = encrypt(513, PLAINTEXT);
    let coordinator = SearchCoordinator::new(XteaOracle);
    let runner = BenchmarkRunner::new(&coordinator);

    let records = runner.speedup(&ciphertext, "TESTFRAG", 10, 4)?;
    assert!(records.iter().all(|record| record.keys_found == 1));
    Ok(())
}

#[test]
fn scaleup_keyspace_grows_with_worker_count() -> Result<(), KeysweepError> {
    // true key drawn from the base range is inside every scaled range
    let ciphertext = encrypt(200, PLAINTEXT);
    let coordinator = SearchCoordinator::new(XteaOracle);
    let runner = BenchmarkRunner::new(&coordinator);

    let records = runner.scaleup(&ciphertext, "TESTFRAG", 8, 3)?;

    let sizes: Vec<u64> = records.iter().map(|record| record.keyspace_size).collect();
    assert_eq!(sizes, vec![256, 512, 768]);
    let workers: Vec<usize> = records.iter().map(|record| record.worker_count).collect();
    assert_eq!(workers, vec![1, 2, 3]);
    assert!(records.iter().all(|record| record.keys_found == 1));
    Ok(())
}

#[test]
fn sweeps_reject_zero_max_workers() {
    let ciphertext = encrypt(1, PLAINTEXT);
    let coordinator = SearchCoordinator::new(XteaOracle);
    let runner = BenchmarkRunner::new(&coordinator);

    assert!(runner.speedup(&ciphertext, "TESTFRAG", 8, 0).is_err());
    assert!(runner.scaleup(&ciphertext, "TESTFRAG", 8, 0).is_err());
}

#[test]
fn sweeps_reject_invalid_keyspace_bits() {
    let ciphertext = encrypt(1, PLAINTEXT);
    let coordinator = SearchCoordinator::new(XteaOracle);
    let runner = BenchmarkRunner::new(&coordinator);

    assert!(runner.speedup(&ciphertext, "TESTFRAG", 0, 2).is_err());
    assert!(runner.scaleup(&ciphertext, "TESTFRAG", 64, 2).is_err());
}
