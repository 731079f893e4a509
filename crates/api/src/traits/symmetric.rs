//! Bulk symmetric cipher trait

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

/// A keyed, configured cipher that turns whole messages into ciphertext and back
///
/// Implementations own any chaining state (IV, counter) for the duration of a
/// call. Reusing an IV or counter block across messages under one key is a
/// caller error that implementations do not detect.
pub trait SymmetricCipher {
    /// Human-readable algorithm and mode, e.g. `"AES-256-CBC"`
    fn name(&self) -> &'static str;

    /// Encrypts a complete message
    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a complete message
    ///
    /// Any failure to validate the recovered plaintext is reported as
    /// [`Error::DecryptionFailed`](crate::Error::DecryptionFailed).
    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
