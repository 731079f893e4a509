//! Block padding schemes
//!
//! Padding makes variable-length plaintext fit the whole-block modes (ECB and
//! CBC). Every scheme appends `N = block_size − (len mod block_size)` bytes,
//! so `N` is always in `1..=block_size` and block-aligned input still receives
//! a full block. The last byte of the padding always encodes `N`.
//!
//! ## Validation
//!
//! Removing padding runs after decryption on attacker-controlled data.
//! Validation therefore inspects every byte of the final block regardless of
//! where the first mismatch is, and every failure is reported as the same
//! [`Error::Padding`] carrying only the scheme name. Callers must keep it that
//! way: a distinguishable failure turns the decryptor into a padding oracle.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};

mod pkcs7;
mod x923;

pub use pkcs7::{Pkcs5, Pkcs7};
pub use x923::AnsiX923;

/// A block padding scheme
pub trait Padding {
    /// Scheme name, e.g. `"PKCS#7"`
    fn name(&self) -> &'static str;

    /// Block size the scheme pads to
    fn block_size(&self) -> usize;

    /// Number of padding bytes appended to `data_len` bytes of data
    fn pad_len(&self, data_len: usize) -> usize {
        self.block_size() - data_len % self.block_size()
    }

    /// Write `out.len()` bytes of padding into `out`
    ///
    /// Returns the number of bytes written. Fails with a parameter error if
    /// `out.len()` is not in `1..=block_size`.
    fn fill(&self, out: &mut [u8]) -> Result<usize>;

    /// Validate the padding at the end of `padded` and return the length of
    /// the data in front of it
    fn unpad_len(&self, padded: &[u8]) -> Result<usize>;

    /// Return `data` followed by its padding
    #[cfg(feature = "alloc")]
    fn pad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let n = self.pad_len(data.len());
        let mut out = Vec::with_capacity(data.len() + n);
        out.extend_from_slice(data);
        out.resize(data.len() + n, 0);
        self.fill(&mut out[data.len()..])?;
        Ok(out)
    }

    /// Validate and strip the padding, borrowing the data in front of it
    fn unpad<'a>(&self, padded: &'a [u8]) -> Result<&'a [u8]> {
        let len = self.unpad_len(padded)?;
        Ok(&padded[..len])
    }
}

/// Padding selector used by the high-level engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingScheme {
    /// No padding; input must already be block-aligned for ECB/CBC
    None,
    /// PKCS#7 (RFC 5652)
    #[default]
    Pkcs7,
    /// PKCS#5; identical to PKCS#7 but only defined for 8-byte blocks
    Pkcs5,
    /// ANSI X9.23: zero bytes followed by a length byte
    AnsiX923,
}

impl PaddingScheme {
    /// Scheme name
    pub const fn name(self) -> &'static str {
        match self {
            PaddingScheme::None => "none",
            PaddingScheme::Pkcs7 => pkcs7::PKCS7_NAME,
            PaddingScheme::Pkcs5 => pkcs7::PKCS5_NAME,
            PaddingScheme::AnsiX923 => x923::X923_NAME,
        }
    }

    /// Whether this scheme adds any bytes
    pub const fn is_none(self) -> bool {
        matches!(self, PaddingScheme::None)
    }

    /// Check that the scheme is defined for `block_size`
    ///
    /// PKCS#5 paired with anything but an 8-byte block is rejected here.
    pub fn check_block_size(self, block_size: usize) -> Result<()> {
        match self {
            PaddingScheme::None => Ok(()),
            PaddingScheme::Pkcs7 => Pkcs7::new(block_size).map(|_| ()),
            PaddingScheme::Pkcs5 => Pkcs5::for_block_size(block_size).map(|_| ()),
            PaddingScheme::AnsiX923 => AnsiX923::new(block_size).map(|_| ()),
        }
    }

    /// Pad `data` to a multiple of `block_size`
    ///
    /// [`PaddingScheme::None`] returns the data unchanged.
    #[cfg(feature = "alloc")]
    pub fn pad(self, block_size: usize, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            PaddingScheme::None => Ok(data.to_vec()),
            PaddingScheme::Pkcs7 => Pkcs7::new(block_size)?.pad(data),
            PaddingScheme::Pkcs5 => Pkcs5::for_block_size(block_size)?.pad(data),
            PaddingScheme::AnsiX923 => AnsiX923::new(block_size)?.pad(data),
        }
    }

    /// Validate trailing padding and return the unpadded length
    ///
    /// [`PaddingScheme::None`] returns `padded.len()`.
    pub fn unpad_len(self, block_size: usize, padded: &[u8]) -> Result<usize> {
        match self {
            PaddingScheme::None => Ok(padded.len()),
            PaddingScheme::Pkcs7 => Pkcs7::new(block_size)?.unpad_len(padded),
            PaddingScheme::Pkcs5 => Pkcs5::for_block_size(block_size)?.unpad_len(padded),
            PaddingScheme::AnsiX923 => AnsiX923::new(block_size)?.unpad_len(padded),
        }
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reject padding counts outside `1..=block_size`
#[inline]
fn check_fill_len(count: usize, block_size: usize) -> Result<()> {
    if count == 0 || count > block_size {
        return Err(Error::param(
            "padding length",
            "padding length must be between 1 and the block size",
        ));
    }
    Ok(())
}

/// Public preconditions every scheme checks before looking at byte values
///
/// The buffer length is not secret, so these may return early.
#[inline]
fn check_padded_len(padded: &[u8], block_size: usize, scheme: &'static str) -> Result<()> {
    if padded.is_empty() || padded.len() % block_size != 0 {
        return Err(Error::Padding { scheme });
    }
    Ok(())
}
