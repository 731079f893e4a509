//! AES block cipher
//!
//! This module implements the Rijndael block transform as standardized in
//! FIPS 197 for 128, 192 and 256-bit keys. A single [`Aes`] type serves all
//! three key sizes; the variant is selected from the key length when the
//! cipher is constructed.
//!
//! The state is the 16-byte block in column-major order: byte `r + 4c` holds
//! row `r` of column `c`.
//!
//! ## Side channels
//!
//! SubBytes and the key schedule index the S-box tables with secret bytes, so
//! this implementation is not constant-time against cache-timing adversaries.
//! GF(2⁸) multiplication in the mixing steps is branch-free on data.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_common::barrier;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use super::{Block, BlockCipher};
use crate::error::{Result, validate};
use crate::gf256::{gmul, xtime};

mod key_schedule;
pub mod tables;

pub use key_schedule::{KeySchedule, KeySize};

use tables::{RSBOX, SBOX};

/// AES block cipher for any of the three key sizes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Create a cipher from a 16, 24 or 32 byte key
    ///
    /// Any other key length is rejected with a parameter error.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// Create a cipher for an explicit key size
    ///
    /// Fails with a length error if `key` does not match `key_size`.
    pub fn with_key_size(key_size: KeySize, key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::expand_with(key_size, key)?,
        })
    }

    /// Key size selected at construction
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Number of round keys (11, 13 or 15)
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// Expanded key schedule
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypt one state in place
    pub fn encrypt_state(&self, state: &mut Block) {
        let last = self.schedule.rounds() - 1;

        barrier::compiler_fence_seq_cst();
        add_round_key(state, self.schedule.key_for_round(0));

        for round in 1..last {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, self.schedule.key_for_round(round));
        }

        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, self.schedule.key_for_round(last));
        barrier::compiler_fence_seq_cst();
    }

    /// Decrypt one state in place
    pub fn decrypt_state(&self, state: &mut Block) {
        let last = self.schedule.rounds() - 1;

        barrier::compiler_fence_seq_cst();
        add_round_key(state, self.schedule.key_for_round(last));

        for round in (1..last).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, self.schedule.key_for_round(round));
            inv_mix_columns(state);
        }

        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, self.schedule.key_for_round(0));
        barrier::compiler_fence_seq_cst();
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name(&self) -> &'static str {
        self.key_size().name()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        self.encrypt_state(&mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        self.decrypt_state(&mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes")
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}

#[inline(always)]
fn add_round_key(state: &mut Block, round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

#[inline(always)]
fn sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

#[inline(always)]
fn inv_sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = RSBOX[*b as usize];
    }
}

/// Row `r` (bytes `r, r+4, r+8, r+12`) rotates left by `r` positions
fn shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + r) % 4) + r];
        }
    }
}

fn inv_shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + 4 - r) % 4) + r];
        }
    }
}

/// Each column is multiplied by {03}x³ + {01}x² + {01}x + {02}
fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        let t = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ t ^ xtime(a0 ^ a1);
        col[1] = a1 ^ t ^ xtime(a1 ^ a2);
        col[2] = a2 ^ t ^ xtime(a2 ^ a3);
        col[3] = a3 ^ t ^ xtime(a3 ^ a0);
    }
}

/// Each column is multiplied by {0b}x³ + {0d}x² + {09}x + {0e}
fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
        col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
        col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
        col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
    }
}
