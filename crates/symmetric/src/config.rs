//! Runtime configuration for [`AesCipher`](crate::AesCipher)

use core::fmt;

use rijndael_algorithms::{KeySize, ModeKind, PaddingScheme};
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::{from_primitive_error, Error, Result};

/// Key size, mode and padding for one cipher engine
///
/// Built with [`CipherConfig::new`] and the `with_*` methods. Setting the mode
/// also resets the padding to that mode's default (PKCS#7 for ECB and CBC,
/// none for CTR), so call [`with_padding`](Self::with_padding) last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherConfig {
    /// AES variant
    pub key_size: KeySize,
    /// Mode of operation
    pub mode: ModeKind,
    /// Padding applied before encryption and checked after decryption
    pub padding: PaddingScheme,
}

impl CipherConfig {
    /// CBC with PKCS#7 padding for the given key size
    pub const fn new(key_size: KeySize) -> Self {
        Self {
            key_size,
            mode: ModeKind::Cbc,
            padding: PaddingScheme::Pkcs7,
        }
    }

    /// Padding used when none is requested explicitly
    pub const fn default_padding(mode: ModeKind) -> PaddingScheme {
        match mode {
            ModeKind::Ctr => PaddingScheme::None,
            ModeKind::Ecb | ModeKind::Cbc => PaddingScheme::Pkcs7,
        }
    }

    /// Select the mode and its default padding
    pub const fn with_mode(mut self, mode: ModeKind) -> Self {
        self.mode = mode;
        self.padding = Self::default_padding(mode);
        self
    }

    /// Select the padding scheme
    pub const fn with_padding(mut self, padding: PaddingScheme) -> Self {
        self.padding = padding;
        self
    }

    /// Select the key size
    pub const fn with_key_size(mut self, key_size: KeySize) -> Self {
        self.key_size = key_size;
        self
    }

    /// Reject combinations that are not defined for a 16-byte block
    ///
    /// PKCS#5 only exists for 8-byte blocks and is refused here. Padding with
    /// CTR is allowed, if pointless.
    pub fn validate(&self) -> Result<()> {
        self.padding
            .check_block_size(AES_BLOCK_SIZE)
            .map_err(from_primitive_error)
            .map_err(|e| match e {
                Error::InvalidParameter { message, .. } => Error::InvalidParameter {
                    context: "CipherConfig padding",
                    message,
                },
                other => other,
            })
    }

    /// Combined algorithm name, e.g. `"AES-256-CBC"`
    pub const fn name(&self) -> &'static str {
        match (self.key_size, self.mode) {
            (KeySize::Aes128, ModeKind::Ecb) => "AES-128-ECB",
            (KeySize::Aes128, ModeKind::Cbc) => "AES-128-CBC",
            (KeySize::Aes128, ModeKind::Ctr) => "AES-128-CTR",
            (KeySize::Aes192, ModeKind::Ecb) => "AES-192-ECB",
            (KeySize::Aes192, ModeKind::Cbc) => "AES-192-CBC",
            (KeySize::Aes192, ModeKind::Ctr) => "AES-192-CTR",
            (KeySize::Aes256, ModeKind::Ecb) => "AES-256-ECB",
            (KeySize::Aes256, ModeKind::Cbc) => "AES-256-CBC",
            (KeySize::Aes256, ModeKind::Ctr) => "AES-256-CTR",
        }
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self::new(KeySize::Aes256)
    }
}

impl fmt::Display for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} padding", self.name(), self.padding)
    }
}
