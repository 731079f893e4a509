//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive counter blocks and XORing the result with the data. The whole
//! 16-byte block is the counter: it is incremented as a 128-bit big-endian
//! integer, carrying from byte 15 towards byte 0, and wraps to zero after
//! `ff..ff`.
//!
//! Encryption and decryption are the same operation. Any length is accepted,
//! and the keystream position carries across calls so a message may be fed in
//! pieces. The counter for block `i` is `counter0 + i`, which makes
//! [`Ctr::seek`] possible.
//!
//! Reusing an initial counter block with the same key exposes the XOR of the
//! two plaintexts. Uniqueness is the caller's obligation.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_common::barrier;
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_CTR_COUNTER_SIZE};

use super::super::{Block, BlockCipher};
use super::ModeKind;
use crate::error::{Result, validate};
use crate::types::Nonce;

/// Increment a counter block as a 128-bit big-endian integer
///
/// Byte 15 is incremented first; a byte rolling over from `0xff` to `0x00`
/// carries into the byte on its left. `ff..ff` wraps to all zeros.
#[inline]
pub fn increment_counter(counter: &mut [u8; AES_CTR_COUNTER_SIZE]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// Counter mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize> {
    cipher: B,
    initial: Block,
    counter: Block,
    keystream: Block,
    keystream_pos: usize,
    // `counter` lies past a rollover of `initial`
    past_rollover: bool,
    wrapped: bool,
}

impl<B: BlockCipher + Zeroize> Ctr<B> {
    /// Creates a new CTR mode instance
    ///
    /// `counter0` is the full initial counter block; how a caller splits it
    /// into nonce and counter fields is up to them.
    pub fn new(cipher: B, counter0: &Nonce<AES_CTR_COUNTER_SIZE>) -> Result<Self> {
        validate::length("CTR counter block", AES_CTR_COUNTER_SIZE, B::BLOCK_SIZE)?;

        let initial = *counter0.as_array();
        Ok(Self {
            cipher,
            initial,
            counter: initial,
            keystream: [0u8; AES_BLOCK_SIZE],
            keystream_pos: AES_BLOCK_SIZE,
            past_rollover: false,
            wrapped: false,
        })
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// Always [`ModeKind::Ctr`]
    pub fn mode(&self) -> ModeKind {
        ModeKind::Ctr
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    /// The initial counter block this stream started from
    pub fn initial_counter(&self) -> &Block {
        &self.initial
    }

    /// The next counter block that will be encrypted
    pub fn counter(&self) -> &Block {
        &self.counter
    }

    /// Whether keystream has been generated from a counter block reached by
    /// rolling over from `ff..ff` to zero
    ///
    /// Such counter blocks may already have been used by another message
    /// starting from a low counter value. Reaching `ff..ff` without
    /// encrypting the block after it does not count.
    pub fn has_wrapped(&self) -> bool {
        self.wrapped
    }

    fn generate_keystream(&mut self) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        self.keystream = self.counter;
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.wrapped |= self.past_rollover;

        increment_counter(&mut self.counter);
        if self.counter == [0u8; AES_BLOCK_SIZE] {
            self.past_rollover = true;
        }
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// XOR the keystream into `data` in place
    ///
    /// Encrypts plaintext and decrypts ciphertext alike. Never fails on
    /// length.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos >= AES_BLOCK_SIZE {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }
        Ok(())
    }

    /// Position the stream at the start of block `block_index`
    ///
    /// The next counter becomes `counter0 + block_index` modulo 2¹²⁸ and any
    /// buffered keystream is discarded. If the addition overflows, the next
    /// block generated counts as a rollover for [`has_wrapped`](Self::has_wrapped).
    pub fn seek(&mut self, block_index: u128) {
        let start = u128::from_be_bytes(self.initial);
        let (next, overflow) = start.overflowing_add(block_index);
        self.counter = next.to_be_bytes();
        self.keystream.zeroize();
        self.keystream_pos = AES_BLOCK_SIZE;
        self.past_rollover = overflow;
        self.wrapped = false;
    }

    /// Return to the initial counter block
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Encrypts a message into a new buffer
    #[cfg(feature = "alloc")]
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.apply_keystream(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message into a new buffer
    ///
    /// In CTR mode, encryption and decryption are the same operation.
    #[cfg(feature = "alloc")]
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }
}
