//! The configured AES bulk cipher
//!
//! [`AesCipher`] combines a key, a [`CipherConfig`] and, for CBC and CTR, a
//! 16-byte IV or initial counter block. Each `encrypt`/`decrypt` call handles
//! one complete message: padding is added before encryption and checked after
//! decryption, and the chaining value or counter starts from the IV again on
//! every call.
//!
//! # IV reuse
//!
//! Calling [`AesCipher::encrypt`] twice on the same engine encrypts both
//! messages under the same IV. For CTR that exposes the XOR of the two
//! plaintexts. Create a new engine, or use [`encrypt_framed`], with a fresh IV
//! for every message.

use alloc::vec::Vec;

use log::{debug, trace, warn};

use rijndael_algorithms::{Aes, Cbc, Ctr, Ecb, KeySize, ModeKind, Nonce, PaddingScheme};
use rijndael_api::SymmetricCipher;
use rijndael_common::SecretVec;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::config::CipherConfig;
use crate::error::{decryption_failed, Error, Result, ResultExt, SymmetricResultExt};

enum Engine {
    Ecb(Ecb<Aes>),
    Cbc(Cbc<Aes>),
    Ctr(Ctr<Aes>),
}

/// AES engine for one key, mode and padding combination
pub struct AesCipher {
    config: CipherConfig,
    engine: Engine,
}

impl AesCipher {
    /// Create an engine
    ///
    /// `iv` is the 16-byte IV (CBC) or initial counter block (CTR) and must be
    /// `None` for ECB. The key length must match `config.key_size`.
    pub fn new(config: CipherConfig, key: &[u8], iv: Option<&[u8]>) -> Result<Self> {
        config.validate()?;

        let cipher = Aes::with_key_size(config.key_size, key).map_key_err()?;

        let engine = match (config.mode, iv) {
            (ModeKind::Ecb, None) => Engine::Ecb(Ecb::new(cipher)),
            (ModeKind::Ecb, Some(_)) => {
                return Err(Error::InvalidParameter {
                    context: "ECB",
                    message: "ECB mode does not take an IV",
                });
            }
            (ModeKind::Cbc, Some(iv)) => {
                let iv = block_nonce(iv)?;
                Engine::Cbc(Cbc::new(cipher, &iv).map_primitive_err()?)
            }
            (ModeKind::Ctr, Some(iv)) => {
                let counter0 = block_nonce(iv)?;
                Engine::Ctr(Ctr::new(cipher, &counter0).map_primitive_err()?)
            }
            (mode, None) => {
                return Err(Error::InvalidParameter {
                    context: mode.name(),
                    message: "mode requires a 16-byte IV or initial counter block",
                });
            }
        };

        debug!("created {} engine with {} padding", config.name(), config.padding);

        Ok(Self { config, engine })
    }

    /// Configuration this engine was built with
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// AES variant
    pub fn key_size(&self) -> KeySize {
        self.config.key_size
    }

    /// Mode of operation
    pub fn mode(&self) -> ModeKind {
        self.config.mode
    }

    /// Padding scheme
    pub fn padding(&self) -> PaddingScheme {
        self.config.padding
    }

    /// The IV or initial counter block, `None` for ECB
    pub fn iv(&self) -> Option<&[u8]> {
        match &self.engine {
            Engine::Ecb(_) => None,
            Engine::Cbc(cbc) => Some(&cbc.iv()[..]),
            Engine::Ctr(ctr) => Some(&ctr.initial_counter()[..]),
        }
    }

    /// Pad and encrypt one message
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        trace!("{}: encrypting {} bytes", self.config.name(), plaintext.len());

        let mut buf = self
            .config
            .padding
            .pad(AES_BLOCK_SIZE, plaintext)
            .map_primitive_err()?;

        match &mut self.engine {
            Engine::Ecb(ecb) => ecb.encrypt_in_place(&mut buf),
            Engine::Cbc(cbc) => cbc.encrypt_in_place(&mut buf),
            Engine::Ctr(ctr) => {
                ctr.reset();
                let res = ctr.apply_keystream(&mut buf);
                if ctr.has_wrapped() {
                    warn!("{}: 128-bit counter rolled over", self.config.name());
                }
                res
            }
        }
        .map_primitive_err()?;

        Ok(buf)
    }

    /// Decrypt one message and strip its padding
    ///
    /// A ciphertext that is not a whole number of blocks (ECB, CBC) is a
    /// length error. Any problem with the recovered padding is reported as
    /// [`Error::DecryptionFailed`] and nothing else.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        trace!("{}: decrypting {} bytes", self.config.name(), ciphertext.len());

        let mut work = SecretVec::from_slice(ciphertext);
        match &mut self.engine {
            Engine::Ecb(ecb) => ecb.decrypt_in_place(work.as_mut_slice()),
            Engine::Cbc(cbc) => cbc.decrypt_in_place(work.as_mut_slice()),
            Engine::Ctr(ctr) => {
                ctr.reset();
                let res = ctr.apply_keystream(work.as_mut_slice());
                if ctr.has_wrapped() {
                    warn!("{}: 128-bit counter rolled over", self.config.name());
                }
                res
            }
        }
        .map_primitive_err()?;

        let name = self.config.name();
        let len = self
            .config
            .padding
            .unpad_len(AES_BLOCK_SIZE, work.as_slice())
            .wrap_err(|| {
                debug!("{}: decryption failed", name);
                decryption_failed()
            })?;

        Ok(work.as_slice()[..len].to_vec())
    }
}

impl SymmetricCipher for AesCipher {
    fn name(&self) -> &'static str {
        self.config.name()
    }

    fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        AesCipher::encrypt(self, plaintext)
    }

    fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        AesCipher::decrypt(self, ciphertext)
    }
}

impl core::fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesCipher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Encrypt `plaintext` and prepend the IV: `iv || ciphertext`
///
/// Only defined for CBC and CTR.
pub fn encrypt_framed(config: CipherConfig, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    require_iv_mode(&config)?;

    let mut engine = AesCipher::new(config, key, Some(iv))?;
    let ciphertext = engine.encrypt(plaintext)?;

    let mut framed = Vec::with_capacity(iv.len() + ciphertext.len());
    framed.extend_from_slice(iv);
    framed.extend_from_slice(&ciphertext);
    Ok(framed)
}

/// Split `iv || ciphertext` and decrypt
pub fn decrypt_framed(config: CipherConfig, key: &[u8], framed: &[u8]) -> Result<Vec<u8>> {
    require_iv_mode(&config)?;

    if framed.len() < AES_BLOCK_SIZE {
        return Err(Error::InvalidLength {
            context: "framed ciphertext",
            expected: AES_BLOCK_SIZE,
            actual: framed.len(),
        });
    }
    let (iv, ciphertext) = framed.split_at(AES_BLOCK_SIZE);

    AesCipher::new(config, key, Some(iv))?.decrypt(ciphertext)
}

fn require_iv_mode(config: &CipherConfig) -> Result<()> {
    if !config.mode.requires_iv() {
        return Err(Error::InvalidParameter {
            context: "framing",
            message: "IV framing is only defined for CBC and CTR",
        });
    }
    Ok(())
}

fn block_nonce(iv: &[u8]) -> Result<Nonce<AES_BLOCK_SIZE>> {
    Nonce::from_slice(iv).with_context("initialization vector")
}
