//! Block cipher modes of operation
//!
//! ECB, CBC and CTR as defined in NIST SP 800-38A. Each mode owns its block
//! cipher and walks a caller-owned buffer one block at a time. ECB and CBC
//! require whole blocks; CTR accepts any length.

use core::fmt;

pub mod cbc;
pub mod ctr;
pub mod ecb;

pub use cbc::Cbc;
pub use ctr::{increment_counter, Ctr};
pub use ecb::Ecb;

/// Confidentiality mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeKind {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Counter
    Ctr,
}

impl ModeKind {
    /// Whether plaintext must be padded to a whole number of blocks
    pub const fn requires_padding(self) -> bool {
        !matches!(self, ModeKind::Ctr)
    }

    /// Whether the mode takes a 16-byte IV or initial counter block
    pub const fn requires_iv(self) -> bool {
        !matches!(self, ModeKind::Ecb)
    }

    /// Whether independent blocks can be encrypted concurrently
    ///
    /// False only for CBC, where each block's input depends on the previous
    /// block's ciphertext.
    pub const fn encrypt_parallelizable(self) -> bool {
        !matches!(self, ModeKind::Cbc)
    }

    /// Whether independent blocks can be decrypted concurrently
    pub const fn decrypt_parallelizable(self) -> bool {
        true
    }

    /// Short mode name
    pub const fn name(self) -> &'static str {
        match self {
            ModeKind::Ecb => "ECB",
            ModeKind::Cbc => "CBC",
            ModeKind::Ctr => "CTR",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
