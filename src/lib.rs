//! # rijndael
//!
//! A pure Rust, software-only AES engine: the Rijndael block transform for
//! 128, 192 and 256-bit keys, ECB, CBC and CTR modes of operation, and PKCS#7,
//! PKCS#5 and ANSI X9.23 padding, checked against NIST SP 800-38A.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rijndael = "0.3"
//! ```
//!
//! ```
//! use rijndael::prelude::*;
//!
//! let config = CipherConfig::new(KeySize::Aes256).with_mode(ModeKind::Ctr);
//! let key = [0x60; 32];
//! let nonce = [0xf0; 16];
//!
//! let mut cipher = AesCipher::new(config, &key, Some(&nonce)).unwrap();
//! let ciphertext = cipher.encrypt(b"hello").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"hello");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: `Vec`-returning convenience APIs without `std`
//! - `symmetric` (default): the high-level [`symmetric::AesCipher`] engine
//! - `serde`: `Serialize`/`Deserialize` for configuration types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`rijndael-algorithms`]: GF(2⁸), key schedule, block transform, modes, padding
//! - [`rijndael-symmetric`]: the configured bulk cipher engine
//! - [`rijndael-api`]: error type and public traits
//! - [`rijndael-common`]: zeroizing secret containers
//! - [`rijndael-internal`]: constant-time helpers
//! - [`rijndael-params`]: constants

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use rijndael_algorithms as algorithms;
pub use rijndael_api as api;
pub use rijndael_common as common;
pub use rijndael_internal as internal;
pub use rijndael_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use rijndael_symmetric as symmetric;

/// Common imports for rijndael users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Block cipher, modes and padding
    pub use crate::algorithms::{
        Aes, AnsiX923, BlockCipher, Cbc, Ctr, Ecb, KeySize, ModeKind, Nonce, Padding,
        PaddingScheme, Pkcs5, Pkcs7,
    };

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "alloc")]
    pub use crate::api::SymmetricCipher;

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{decrypt_framed, encrypt_framed, AesCipher, CipherConfig};
}

// Re-export zeroize for convenience
pub use zeroize;
