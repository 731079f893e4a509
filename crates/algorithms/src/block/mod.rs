//! Block ciphers and their modes of operation
//!
//! [`BlockCipher`] is the seam between the raw transform and the modes: ECB,
//! CBC and CTR are generic over it and only ever see whole blocks.

use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::Result;

pub mod aes;
pub mod modes;

pub use aes::{Aes, KeySchedule, KeySize};
pub use modes::{Cbc, Ctr, Ecb, ModeKind};

/// One AES state, 16 bytes in column-major order
pub type Block = [u8; AES_BLOCK_SIZE];

/// A keyed block cipher
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name, e.g. `"AES-256"`
    fn name(&self) -> &'static str;

    /// Encrypt a single block in place
    ///
    /// Fails with a length error unless `block.len() == Self::BLOCK_SIZE`.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    ///
    /// Fails with a length error unless `block.len() == Self::BLOCK_SIZE`.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
