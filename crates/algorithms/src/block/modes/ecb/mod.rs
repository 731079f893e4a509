//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed independently under the same key, so equal
//! plaintext blocks always produce equal ciphertext blocks. ECB leaks the
//! block-level structure of the plaintext and should only be used for single
//! blocks or for interoperability.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use super::ModeKind;
use crate::error::{Result, validate};

/// ECB mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Wrap a keyed block cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Always [`ModeKind::Ecb`]
    pub fn mode(&self) -> ModeKind {
        ModeKind::Ecb
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        B::BLOCK_SIZE
    }

    /// Encrypt a whole number of blocks in place
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("ECB plaintext", data.len(), B::BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(B::BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypt a whole number of blocks in place
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("ECB ciphertext", data.len(), B::BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(B::BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }

    /// Encrypt into a new buffer
    ///
    /// The plaintext must already be padded to a multiple of the block size.
    #[cfg(feature = "alloc")]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypt into a new buffer
    #[cfg(feature = "alloc")]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }
}
