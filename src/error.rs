//! Error types for keysweep operations
//!
//! This module defines the error types used throughout the engine. Argument
//! and configuration problems are rejected before any worker is dispatched;
//! per-candidate decryption failures are a separate lightweight type that is
//! recovered inside the worker scan loop and never propagated.

use thiserror::Error;

/// Main error type for all keysweep operations
#[derive(Debug, Error)]
pub enum KeysweepError {
    /// Input validation failed
    #[error("Invalid input: {field} - {reason}. {suggestion}")]
    InvalidInput {
        field: String,
        reason: String,
        suggestion: String,
    },

    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A worker thread died before finishing its sub-range
    #[error("Worker {worker_id} panicked before completing its sub-range; keyspace coverage is incomplete")]
    WorkerPanicked { worker_id: usize },
}

impl KeysweepError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a detailed config error
    pub fn config_error(field: impl Into<String>, reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Config(format!("{} - {}: {}", field.into(), reason.into(), suggestion.into()))
    }

    /// Create a worker panic error
    pub fn worker_panicked(worker_id: usize) -> Self {
        Self::WorkerPanicked { worker_id }
    }

    /// Check if this error represents rejected input (as opposed to a runtime fault)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Config(_))
    }
}

/// Per-candidate-key decryption failure signalled by a [`DecryptionOracle`]
///
/// Most trial keys in an exhaustive scan are wrong, and a well-behaved cipher
/// rejects them (bad padding, failed integrity check). Workers treat this as
/// "not a match" and keep scanning; it never aborts a search.
///
/// [`DecryptionOracle`]: crate::oracle::DecryptionOracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("decryption failed for candidate key")]
pub struct DecryptionFailed;
