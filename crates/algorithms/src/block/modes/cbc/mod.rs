//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector. The
//! IV acts as a ciphertext block sitting immediately before the buffer.
//!
//! Every call is treated as one complete message: the chaining value starts
//! from the IV again on each call. Encryption is inherently sequential.
//! Decryption only needs ciphertext blocks that are already known, so each
//! block could be processed independently.
//!
//! This implementation follows NIST SP 800-38A. Input must already be a
//! whole number of blocks; see [`crate::padding`] for variable-length data.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_internal::xor_in_place;
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_CBC_IV_SIZE};

use super::super::{Block, BlockCipher};
use super::ModeKind;
use crate::error::{Result, validate};
use crate::types::Nonce;

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Nonce<AES_CBC_IV_SIZE>,
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be unpredictable and must not be reused with the same key.
    pub fn new(cipher: B, iv: &Nonce<AES_CBC_IV_SIZE>) -> Result<Self> {
        validate::length("CBC initialization vector", AES_CBC_IV_SIZE, B::BLOCK_SIZE)?;

        Ok(Self {
            cipher,
            iv: iv.clone(),
        })
    }

    /// The initialization vector
    pub fn iv(&self) -> &Nonce<AES_CBC_IV_SIZE> {
        &self.iv
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Always [`ModeKind::Cbc`]
    pub fn mode(&self) -> ModeKind {
        ModeKind::Cbc
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    /// Encrypts a whole number of blocks in place
    ///
    /// The length is checked before any block is modified.
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("CBC plaintext", data.len(), AES_BLOCK_SIZE)?;

        let mut chain: Block = *self.iv.as_array();
        for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
            xor_in_place(block, &chain);
            self.cipher.encrypt_block(block)?;
            chain.copy_from_slice(block);
        }
        chain.zeroize();
        Ok(())
    }

    /// Decrypts a whole number of blocks in place
    ///
    /// Each block is XORed with the *original* previous ciphertext block,
    /// which is saved before the block is overwritten.
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("CBC ciphertext", data.len(), AES_BLOCK_SIZE)?;

        let mut chain: Block = *self.iv.as_array();
        let mut saved: Block = [0u8; AES_BLOCK_SIZE];
        for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &chain);
            chain = saved;
        }
        chain.zeroize();
        saved.zeroize();
        Ok(())
    }

    /// Encrypts a message into a new buffer
    ///
    /// The plaintext must be a multiple of the block size.
    #[cfg(feature = "alloc")]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.encrypt_in_place(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message into a new buffer
    ///
    /// The ciphertext must be a multiple of the block size.
    #[cfg(feature = "alloc")]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place(&mut plaintext)?;
        Ok(plaintext)
    }
}
