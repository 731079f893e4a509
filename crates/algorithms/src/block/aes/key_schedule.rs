//! AES key expansion
//!
//! A single byte-oriented schedule covers all three key sizes. The variant is
//! picked at runtime from the key length and the expanded words are written
//! into a fixed 240-byte [`SecretBuffer`], of which AES-128 and AES-192 use a
//! prefix.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use rijndael_common::SecretBuffer;
use rijndael_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUND_KEYS, AES192_KEY_SIZE, AES192_ROUND_KEYS, AES256_KEY_SIZE,
    AES256_ROUND_KEYS, AES_BLOCK_SIZE, AES_MAX_SCHEDULE_SIZE, AES_WORD_SIZE,
};

use super::tables::{RCON, SBOX};
use crate::error::{Error, Result, validate};

/// The three AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySize {
    /// 128-bit key, 10 transform rounds
    Aes128,
    /// 192-bit key, 12 transform rounds
    Aes192,
    /// 256-bit key, 14 transform rounds
    Aes256,
}

impl KeySize {
    /// Every supported key size, smallest first
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Select the variant for a raw key length in bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Aes128),
            AES192_KEY_SIZE => Ok(KeySize::Aes192),
            AES256_KEY_SIZE => Ok(KeySize::Aes256),
            _ => Err(Error::param("AES key", "key must be 16, 24 or 32 bytes")),
        }
    }

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (Nk)
    pub const fn words(self) -> usize {
        self.key_len() / AES_WORD_SIZE
    }

    /// Number of round keys in the schedule (Nr + 1)
    pub const fn round_keys(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_ROUND_KEYS,
            KeySize::Aes192 => AES192_ROUND_KEYS,
            KeySize::Aes256 => AES256_ROUND_KEYS,
        }
    }

    /// Length of the expanded schedule in bytes
    pub const fn schedule_len(self) -> usize {
        self.round_keys() * AES_BLOCK_SIZE
    }

    /// Human-readable algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expanded round keys for one AES key
///
/// Round key `i` occupies bytes `16·i .. 16·i + 16`; the first round key is
/// the first 16 bytes of the cipher key itself.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    #[zeroize(skip)]
    key_size: KeySize,
    bytes: SecretBuffer<AES_MAX_SCHEDULE_SIZE>,
}

impl KeySchedule {
    /// Expand a 16, 24 or 32 byte key
    pub fn expand(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_key_len(key.len())?;
        Self::expand_with(key_size, key)
    }

    /// Expand a key whose size the caller has already fixed
    pub fn expand_with(key_size: KeySize, key: &[u8]) -> Result<Self> {
        validate::length(key_size.name(), key.len(), key_size.key_len())?;

        let nk = key_size.words();
        let total_words = key_size.round_keys() * (AES_BLOCK_SIZE / AES_WORD_SIZE);

        let mut bytes = SecretBuffer::<AES_MAX_SCHEDULE_SIZE>::zeroed();
        let w = bytes.as_mut_slice();
        w[..key.len()].copy_from_slice(key);

        let mut temp = [0u8; AES_WORD_SIZE];
        for i in nk..total_words {
            temp.copy_from_slice(&w[(i - 1) * AES_WORD_SIZE..i * AES_WORD_SIZE]);

            if i % nk == 0 {
                temp.rotate_left(1);
                sub_word(&mut temp);
                temp[0] ^= RCON[i / nk];
            } else if key_size == KeySize::Aes256 && i % nk == 4 {
                sub_word(&mut temp);
            }

            let back = (i - nk) * AES_WORD_SIZE;
            let at = i * AES_WORD_SIZE;
            for j in 0..AES_WORD_SIZE {
                w[at + j] = w[back + j] ^ temp[j];
            }
        }
        temp.zeroize();

        Ok(Self { key_size, bytes })
    }

    /// Key size this schedule was expanded for
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of round keys (11, 13 or 15)
    pub fn rounds(&self) -> usize {
        self.key_size.round_keys()
    }

    /// Round key `round`, 16 bytes, or `None` if `round >= self.rounds()`
    pub fn round_key(&self, round: usize) -> Option<&[u8]> {
        let start = round.checked_mul(AES_BLOCK_SIZE)?;
        self.as_bytes().get(start..start.checked_add(AES_BLOCK_SIZE)?)
    }

    /// Round key for the block transform, which only asks for
    /// `0..self.rounds()`
    #[inline(always)]
    pub(crate) fn key_for_round(&self, round: usize) -> &[u8] {
        let start = round * AES_BLOCK_SIZE;
        &self.bytes.as_slice()[start..start + AES_BLOCK_SIZE]
    }

    /// The meaningful prefix of the schedule (`rounds × 16` bytes)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes.as_slice()[..self.key_size.schedule_len()]
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("key_size", &self.key_size)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[inline(always)]
fn sub_word(word: &mut [u8; AES_WORD_SIZE]) {
    for b in word.iter_mut() {
        *b = SBOX[*b as usize];
    }
}
