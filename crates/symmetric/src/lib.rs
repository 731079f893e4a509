//! High-level AES encryption for the rijndael library
//!
//! This crate combines the primitives in `rijndael-algorithms` into a single
//! configured engine, [`AesCipher`], that pads, encrypts, decrypts and
//! unpads whole messages and reports errors through the unified API error
//! type.
//!
//! # Example
//!
//! ```
//! use rijndael_symmetric::{AesCipher, CipherConfig, KeySize, ModeKind};
//!
//! let config = CipherConfig::new(KeySize::Aes128).with_mode(ModeKind::Cbc);
//! let key = [0x2b; 16];
//! let iv = [0x00; 16];
//!
//! let mut cipher = AesCipher::new(config, &key, Some(&iv)).unwrap();
//! let ciphertext = cipher.encrypt(b"Secret message").unwrap();
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"Secret message");
//! ```
//!
//! # Logging
//!
//! Engine construction, per-call buffer sizes and decryption failures are
//! reported through the [`log`] facade. Key and IV bytes are never logged.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cipher;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use cipher::{decrypt_framed, encrypt_framed, AesCipher};
pub use config::CipherConfig;
pub use rijndael_algorithms::{KeySize, ModeKind, PaddingScheme};
pub use rijndael_api::SymmetricCipher;

// Re-export the API error system instead of custom error types
pub use rijndael_api::error::{Error, Result, ResultExt};
