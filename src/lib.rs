//! Keysweep - A parallel exhaustive key-search engine
//!
//! Keysweep recovers unknown symmetric keys from a bounded keyspace by brute
//! force: the keyspace is statically partitioned across native worker
//! threads, each worker trial-decrypts every candidate key in its sub-range
//! through a pluggable decryption oracle, and candidates whose plaintext
//! contains a known fragment are reported. The engine never implements a
//! cipher itself; decrypt-and-test is an external collaborator.
//!
//! # Architecture
//!
//! ```text
//! KeyRange          (keyspace interval, partitioned with remainder-on-last)
//!     ↓ one sub-range per worker
//! Worker            (exhaustive scan: oracle + match predicate + progress)
//!     ↓ fork-join barrier
//! SearchCoordinator (partition, spawn, join, aggregate, time)
//!     ↓ repeated sequential runs
//! BenchmarkRunner   (speedup / scaleup parallel-efficiency sweeps)
//! ```
//!
//! # Guarantees
//!
//! - **Completeness**: every key in the searched range whose decryption
//!   contains the fragment is reported; there is no sampling and no
//!   early exit.
//! - **Coverage**: sub-ranges are disjoint and gap-free by construction;
//!   a worker failure surfaces as an error instead of silently dropping
//!   its sub-range.
//! - **Isolation**: benchmark iterations run strictly sequentially with
//!   fresh task sets, so per-iteration timings are independent.
//!
//! # Example
//!
//! ```
//! use keysweep::{DecryptionFailed, DecryptionOracle, SearchCoordinator};
//!
//! /// Toy cipher: XOR with the key's little-endian bytes.
//! struct XorOracle;
//!
//! impl DecryptionOracle for XorOracle {
//!     fn try_decrypt(&self, key: u64, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptionFailed> {
//!         let key_bytes = key.to_le_bytes();
//!         Ok(ciphertext
//!             .iter()
//!             .enumerate()
//!             .map(|(i, byte)| byte ^ key_bytes[i % 8])
//!             .collect())
//!     }
//! }
//!
//! // encrypt "attack at dawn" under key 0x2a5b
//! let secret_key: u64 = 0x2a5b;
//! let key_bytes = secret_key.to_le_bytes();
//! let ciphertext: Vec<u8> = b"attack at dawn"
//!     .iter()
//!     .enumerate()
//!     .map(|(i, byte)| byte ^ key_bytes[i % 8])
//!     .collect();
//!
//! // search the full 16-bit keyspace with 4 workers
//! let coordinator = SearchCoordinator::new(XorOracle);
//! let result = coordinator.search(&ciphertext, "attack", 16, 4).unwrap();
//!
//! assert_eq!(result.found_keys, vec![secret_key]);
//! assert_eq!(result.keys_searched, 65536);
//! ```

pub mod benchmark;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod oracle;
pub mod predicate;
pub mod progress;
pub mod range;
pub mod worker;

pub use benchmark::{BenchmarkRecord, BenchmarkRunner};
pub use config::{SearchConfig, DEFAULT_PROGRESS_INTERVAL_KEYS};
pub use coordinator::{SearchCoordinator, SearchResult};
pub use error::{DecryptionFailed, KeysweepError};
pub use oracle::{mask_for_bits, DecryptionOracle};
pub use predicate::MatchPredicate;
pub use progress::{LogProgressObserver, ProgressCounter, ProgressObservation, ProgressObserver};
pub use range::KeyRange;
pub use worker::{SearchTask, WorkerReport};

/// Type alias for Results using KeysweepError
pub type Result<T> = std::result::Result<T, KeysweepError>;
