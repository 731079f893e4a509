//! Known-answer vectors and test helpers for the rijndael library
//!
//! The vector tables in [`vectors`] are transcribed from NIST SP 800-38A
//! Appendix F and FIPS 197 Appendices A and C. The integration tests under
//! `tests/` run every engine layer against them.

pub mod vectors;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Decode a hex string, panicking on malformed input
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex in test vector {:?}: {}", s, e))
}

/// Decode a 32-character hex string into a block
pub fn unhex_block(s: &str) -> [u8; 16] {
    let bytes = unhex(s);
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    block
}

/// Deterministic pseudo-random bytes for reproducible tests
pub fn seeded_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}
