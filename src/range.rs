//! Keyspace intervals and static partitioning
//!
//! A [`KeyRange`] is a half-open interval `[start, end)` of 64-bit key
//! indices. Partitioning divides a range into contiguous, non-overlapping
//! sub-ranges whose union is exactly the original range, with the integer
//! division remainder absorbed by the last sub-range.

use crate::error::KeysweepError;
use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` of candidate key indices
///
/// Ranges are immutable once created and cheap to copy. `end - start` is the
/// number of keys the range owns; `start == end` is a valid empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    /// First key index in the range (inclusive)
    pub start: u64,
    /// One past the last key index in the range (exclusive)
    pub end: u64,
}

impl KeyRange {
    /// Create a range, rejecting inverted bounds
    pub fn new(start: u64, end: u64) -> Result<Self, KeysweepError> {
        if start > end {
            return Err(KeysweepError::invalid_input(
                "key_range",
                format!("start ({}) is greater than end ({})", start, end),
                "Provide bounds with start <= end; use start == end for an empty range",
            ));
        }
        Ok(Self { start, end })
    }

    /// The full keyspace of a `bits`-bit key: `[0, 2^bits)`
    ///
    /// A keyspace of `bits` bits contains `2^bits` distinct keys, indices
    /// `0..2^bits - 1`. Widths of 0 or more than 63 bits are rejected so the
    /// exclusive upper bound always fits in a `u64`.
    pub fn of_bits(bits: u8) -> Result<Self, KeysweepError> {
        if bits == 0 || bits > 63 {
            return Err(KeysweepError::invalid_input(
                "keyspace_bits",
                format!("value {} is outside the allowed range [1, 63]", bits),
                "Choose a key width between 1 and 63 bits",
            ));
        }
        Ok(Self {
            start: 0,
            end: 1u64 << bits,
        })
    }

    /// The first `count` key indices: `[0, count)`
    ///
    /// Used by scaled-problem benchmarking, where the keyspace grows by a
    /// worker-count multiple and is not necessarily a power of two.
    pub fn with_key_count(count: u64) -> Self {
        Self { start: 0, end: count }
    }

    /// Number of keys owned by this range
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// True when the range owns no keys
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `key` falls inside this range
    pub fn contains(&self, key: u64) -> bool {
        key >= self.start && key < self.end
    }

    /// Divide this range into exactly `workers` contiguous sub-ranges
    ///
    /// Each sub-range owns `floor(len / workers)` keys except the last,
    /// which additionally absorbs the `len % workers` remainder so the
    /// sub-ranges cover `[start, end)` with no gaps and no overlaps. When
    /// `workers` exceeds the number of keys, trailing sub-ranges are empty.
    /// Deterministic given the same range and worker count.
    pub fn partition(&self, workers: usize) -> Result<Vec<KeyRange>, KeysweepError> {
        if workers == 0 {
            return Err(KeysweepError::invalid_input(
                "worker_count",
                "cannot partition a keyspace across zero workers",
                "Request at least one worker",
            ));
        }

        let keys_per_worker = self.len() / workers as u64;
        let mut sub_ranges = Vec::with_capacity(workers);
        let mut cursor = self.start;
        for index in 0..workers {
            let end = if index == workers - 1 {
                // last sub-range absorbs the remainder
                self.end
            } else {
                cursor + keys_per_worker
            };
            sub_ranges.push(KeyRange { start: cursor, end });
            cursor = end;
        }
        Ok(sub_ranges)
    }
}

impl std::fmt::Display for KeyRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
