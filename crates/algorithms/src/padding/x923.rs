//! ANSI X9.23 padding
//!
//! `N − 1` zero bytes followed by a single byte holding `N`.

use subtle::ConstantTimeEq;

use rijndael_internal::{ct_all_equal, ct_lt};
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, MAX_PADDING_BLOCK_SIZE};

use super::{check_fill_len, check_padded_len, Padding};
use crate::error::{Error, Result, validate};

pub(super) const X923_NAME: &str = "ANSI X9.23";

/// ANSI X9.23 padding for block sizes 1 to 255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiX923 {
    block_size: usize,
}

impl AnsiX923 {
    /// ANSI X9.23 over the 16-byte AES block
    pub const AES: AnsiX923 = AnsiX923 { block_size: AES_BLOCK_SIZE };

    /// Create an X9.23 padder for `block_size`
    pub fn new(block_size: usize) -> Result<Self> {
        validate::parameter(
            (1..=MAX_PADDING_BLOCK_SIZE).contains(&block_size),
            "block_size",
            "ANSI X9.23 block size must be between 1 and 255",
        )?;
        Ok(Self { block_size })
    }
}

impl Default for AnsiX923 {
    fn default() -> Self {
        Self::AES
    }
}

impl Padding for AnsiX923 {
    fn name(&self) -> &'static str {
        X923_NAME
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn fill(&self, out: &mut [u8]) -> Result<usize> {
        let count = out.len();
        check_fill_len(count, self.block_size)?;
        out.fill(0);
        out[count - 1] = count as u8;
        Ok(count)
    }

    fn unpad_len(&self, padded: &[u8]) -> Result<usize> {
        let block_size = self.block_size;
        check_padded_len(padded, block_size, X923_NAME)?;

        let last_block = &padded[padded.len() - block_size..];
        let n = last_block[block_size - 1];
        let bs = block_size as u8;

        let in_range = !n.ct_eq(&0) & !ct_lt(bs, n);
        // every padding byte before the length byte must be zero
        let zeros_ok = ct_all_equal(&last_block[..block_size - 1], 0x00, |j| {
            !ct_lt(n, (block_size - j) as u8)
        });

        if bool::from(in_range & zeros_ok) {
            Ok(padded.len() - n as usize)
        } else {
            Err(Error::Padding { scheme: X923_NAME })
        }
    }
}
