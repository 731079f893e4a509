//! PKCS#7 and PKCS#5 padding
//!
//! Every padding byte holds the padding length `N`. PKCS#5 is the same
//! construction restricted to the 8-byte DES block.

use subtle::{Choice, ConstantTimeEq};

use rijndael_internal::{ct_all_equal, ct_lt};
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, MAX_PADDING_BLOCK_SIZE, PKCS5_BLOCK_SIZE};

use super::{check_fill_len, check_padded_len, Padding};
use crate::error::{Error, Result, validate};

pub(super) const PKCS7_NAME: &str = "PKCS#7";
pub(super) const PKCS5_NAME: &str = "PKCS#5";

/// PKCS#7 padding for block sizes 1 to 255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pkcs7 {
    block_size: usize,
}

impl Pkcs7 {
    /// PKCS#7 over the 16-byte AES block
    pub const AES: Pkcs7 = Pkcs7 { block_size: AES_BLOCK_SIZE };

    /// Create a PKCS#7 padder for `block_size`
    pub fn new(block_size: usize) -> Result<Self> {
        validate::parameter(
            (1..=MAX_PADDING_BLOCK_SIZE).contains(&block_size),
            "block_size",
            "PKCS#7 block size must be between 1 and 255",
        )?;
        Ok(Self { block_size })
    }
}

impl Default for Pkcs7 {
    fn default() -> Self {
        Self::AES
    }
}

impl Padding for Pkcs7 {
    fn name(&self) -> &'static str {
        PKCS7_NAME
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn fill(&self, out: &mut [u8]) -> Result<usize> {
        fill_repeated(out, self.block_size)
    }

    fn unpad_len(&self, padded: &[u8]) -> Result<usize> {
        unpad_repeated(padded, self.block_size, PKCS7_NAME)
    }
}

/// PKCS#5 padding, defined only for 8-byte blocks
///
/// Using PKCS#5 with a 16-byte cipher such as AES is a common mistake; the
/// correct name for the same bytes over a 16-byte block is PKCS#7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pkcs5;

impl Pkcs5 {
    /// Create a PKCS#5 padder
    pub const fn new() -> Self {
        Pkcs5
    }

    /// Create a PKCS#5 padder after checking that the cipher uses 8-byte blocks
    pub fn for_block_size(block_size: usize) -> Result<Self> {
        validate::parameter(
            block_size == PKCS5_BLOCK_SIZE,
            "block_size",
            "PKCS#5 is only defined for 8-byte blocks; use PKCS#7",
        )?;
        Ok(Pkcs5)
    }
}

impl Padding for Pkcs5 {
    fn name(&self) -> &'static str {
        PKCS5_NAME
    }

    fn block_size(&self) -> usize {
        PKCS5_BLOCK_SIZE
    }

    fn fill(&self, out: &mut [u8]) -> Result<usize> {
        fill_repeated(out, PKCS5_BLOCK_SIZE)
    }

    fn unpad_len(&self, padded: &[u8]) -> Result<usize> {
        unpad_repeated(padded, PKCS5_BLOCK_SIZE, PKCS5_NAME)
    }
}

fn fill_repeated(out: &mut [u8], block_size: usize) -> Result<usize> {
    let count = out.len();
    check_fill_len(count, block_size)?;
    out.fill(count as u8);
    Ok(count)
}

/// Constant-time check of `N N .. N` at the end of the final block
fn unpad_repeated(padded: &[u8], block_size: usize, scheme: &'static str) -> Result<usize> {
    check_padded_len(padded, block_size, scheme)?;

    let last_block = &padded[padded.len() - block_size..];
    let n = last_block[block_size - 1];
    let bs = block_size as u8;

    // 1 <= n <= block_size
    let in_range = !n.ct_eq(&0) & !ct_lt(bs, n);
    // byte j of the final block is padding iff block_size - j <= n
    let bytes_ok = ct_all_equal(last_block, n, |j| !ct_lt(n, (block_size - j) as u8));

    let valid: Choice = in_range & bytes_ok;
    if bool::from(valid) {
        Ok(padded.len() - n as usize)
    } else {
        Err(Error::Padding { scheme })
    }
}
