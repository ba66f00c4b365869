//! Common test utilities for integration tests
//!
//! Provides the cipher side of the search problem, which the engine itself
//! never implements: a toy 64-bit-block cipher (XTEA) keyed by a `u64`, with
//! a magic leading block so that decryption under a wrong key fails its
//! validity check the way a real cipher rejects bad padding. Also provides
//! masked random key generation for harness setup.

use keysweep::{mask_for_bits, DecryptionFailed, DecryptionOracle};

const XTEA_DELTA: u32 = 0x9E37_79B9;
const XTEA_ROUNDS: u32 = 32;

/// Leading block that must survive the decrypt round-trip for a key to be
/// considered a valid decryption
const MAGIC: [u8; 8] = *b"KEYSWEEP";

/// Expand a 64-bit search key into an XTEA key schedule
///
/// The low and high halves are used raw so distinct search keys always yield
/// distinct schedules; the upper words are mixed so nearby keys diverge.
fn key_schedule(key: u64) -> [u32; 4] {
    let low = key as u32;
    let high = (key >> 32) as u32;
    [
        low,
        high,
        low.wrapping_mul(XTEA_DELTA) ^ high.rotate_left(16),
        high.wrapping_mul(XTEA_DELTA) ^ low.rotate_left(16),
    ]
}

fn encipher_block(k: &[u32; 4], block: &mut [u8]) {
    let mut v0 = u32::from_le_bytes(block[0..4].try_into().unwrap());
    let mut v1 = u32::from_le_bytes(block[4..8].try_into().unwrap());
    let mut sum = 0u32;
    for _ in 0..XTEA_ROUNDS {
        v0 = v0.wrapping_add(
            (((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1)) ^ (sum.wrapping_add(k[(sum & 3) as usize])),
        );
        sum = sum.wrapping_add(XTEA_DELTA);
        v1 = v1.wrapping_add(
            (((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0))
                ^ (sum.wrapping_add(k[((sum >> 11) & 3) as usize])),
        );
    }
    block[0..4].copy_from_slice(&v0.to_le_bytes());
    block[4..8].copy_from_slice(&v1.to_le_bytes());
}

fn decipher_block(k: &[u32; 4], block: &mut [u8]) {
    let mut v0 = u32::from_le_bytes(block[0..4].try_into().unwrap());
    let mut v1 = u32::from_le_bytes(block[4..8].try_into().unwrap());
    let mut sum = XTEA_DELTA.wrapping_mul(XTEA_ROUNDS);
    for _ in 0..XTEA_ROUNDS {
        v1 = v1.wrapping_sub(
            (((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0))
                ^ (sum.wrapping_add(k[((sum >> 11) & 3) as usize])),
        );
        sum = sum.wrapping_sub(XTEA_DELTA);
        v0 = v0.wrapping_sub(
            (((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1)) ^ (sum.wrapping_add(k[(sum & 3) as usize])),
        );
    }
    block[0..4].copy_from_slice(&v0.to_le_bytes());
    block[4..8].copy_from_slice(&v1.to_le_bytes());
}

/// Encrypt `plaintext` under `key`: magic block, then the plaintext
/// zero-padded to a block multiple, each block enciphered in place
pub fn encrypt(key: u64, plaintext: &[u8]) -> Vec<u8> {
    let schedule = key_schedule(key);
    let mut buffer = Vec::with_capacity(8 + plaintext.len() + 7);
    buffer.extend_from_slice(&MAGIC);
    buffer.extend_from_slice(plaintext);
    while buffer.len() % 8 != 0 {
        buffer.push(0);
    }
    for block in buffer.chunks_exact_mut(8) {
        encipher_block(&schedule, block);
    }
    buffer
}

/// Decrypt `ciphertext` under `key`, failing unless the magic block survives
pub fn decrypt(key: u64, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptionFailed> {
    if ciphertext.len() < 8 || ciphertext.len() % 8 != 0 {
        return Err(DecryptionFailed);
    }
    let schedule = key_schedule(key);
    let mut buffer = ciphertext.to_vec();
    for block in buffer.chunks_exact_mut(8) {
        decipher_block(&schedule, block);
    }
    if buffer[0..8] != MAGIC {
        return Err(DecryptionFailed);
    }
    buffer.drain(0..8);
    Ok(buffer)
}

/// Oracle over the XTEA test cipher
pub struct XteaOracle;

impl DecryptionOracle for XteaOracle {
    fn try_decrypt(&self, key: u64, ciphertext: &[u8]) -> Result<Vec<u8>, DecryptionFailed> {
        decrypt(key, ciphertext)
    }
}

/// Draw a random key masked to the low `bits` bits
#[allow(dead_code)]
pub fn random_key(bits: u8) -> u64 {
    rand::random::<u64>() & mask_for_bits(bits)
}

#[test]
fn cipher_round_trips_under_the_right_key() {
    let key = 0x1234_5678_9abc_def0;
    let plaintext = b"Johns Hopkins afraid of the big bad wolf?";
    let ciphertext = encrypt(key, plaintext);
    let recovered = decrypt(key, &ciphertext).unwrap();
    assert_eq!(&recovered[..plaintext.len()], plaintext);
}

#[test]
fn cipher_rejects_wrong_keys() {
    let ciphertext = encrypt(4242, b"some plaintext");
    assert_eq!(decrypt(4243, &ciphertext), Err(DecryptionFailed));
    assert_eq!(decrypt(0, &ciphertext), Err(DecryptionFailed));
}

#[test]
fn cipher_rejects_malformed_ciphertext() {
    assert_eq!(decrypt(1, b""), Err(DecryptionFailed));
    assert_eq!(decrypt(1, b"short"), Err(DecryptionFailed));
    assert_eq!(decrypt(1, &[0u8; 12]), Err(DecryptionFailed));
}

#[test]
fn oracle_delegates_to_the_cipher() {
    let ciphertext = encrypt(7, b"known fragment");
    assert!(XteaOracle.try_decrypt(7, &ciphertext).is_ok());
    assert!(XteaOracle.try_decrypt(8, &ciphertext).is_err());
}
