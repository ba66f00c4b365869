//! Decryption oracle seam
//!
//! The engine never implements a cipher. Trial decryption is delegated to a
//! [`DecryptionOracle`], an external collaborator that attempts to decrypt an
//! opaque ciphertext with one candidate key and either returns the recovered
//! plaintext or signals [`DecryptionFailed`]. The engine is agnostic to the
//! cipher algorithm and key encoding beyond "fits in 64 bits, masked to the
//! requested bit width".

use crate::error::DecryptionFailed;

/// Trial-decryption primitive invoked once per candidate key
///
/// Implementations must be `Sync`: one oracle instance is shared by every
/// worker thread of a search, and `try_decrypt` is called concurrently.
pub trait DecryptionOracle: Sync {
    /// Attempt to decrypt `ciphertext` with `key`
    ///
    /// Returns the recovered plaintext bytes, or [`DecryptionFailed`] when
    /// the key does not produce a well-formed decryption (bad padding,
    /// failed integrity check). Failure is the expected outcome for almost
    /// every key in an exhaustive scan.
    fn try_decrypt(&self, key: u64, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptionFailed>;
}

impl<F> DecryptionOracle for F
where
    F: Fn(u64, &[u8]) -> Result<Vec<u8>, DecryptionFailed> + Sync,
{
    fn try_decrypt(&self, key: u64, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptionFailed> {
        self(key, ciphertext)
    }
}

/// Mask selecting the low `bits` bits of a key
///
/// `mask_for_bits(16)` is `0xFFFF`; widths of 64 or more saturate to the
/// full 64-bit mask and a width of zero selects nothing. Harnesses use this
/// to clamp randomly generated keys into the searched keyspace.
pub fn mask_for_bits(bits: u8) -> u64 {
    match bits {
        0 => 0,
        1..=63 => (1u64 << bits) - 1,
        _ => u64::MAX,
    }
}
