//! AES block cipher, modes of operation and padding
//!
//! This crate holds the arithmetic and byte-level engineering of the rijndael
//! library: GF(2⁸) multiplication, the Rijndael substitution tables, key
//! expansion for 128, 192 and 256-bit keys, the block transform, the ECB, CBC
//! and CTR modes from NIST SP 800-38A and the PKCS#7, PKCS#5 and ANSI X9.23
//! padding schemes. It is usable in both `std` and `no_std` environments; the
//! `alloc` feature adds `Vec`-returning convenience methods.
//!
//! # Security Features
//!
//! - Round keys live in a zeroizing [`SecretBuffer`] and never appear in
//!   `Debug` output
//! - Padding is validated without early exit and every failure is reported
//!   identically
//! - Compiler fences around the block transform and keystream generation
//!
//! # Example
//!
//! ```
//! use rijndael_algorithms::{Aes, Cbc, Nonce, Padding, Pkcs7};
//!
//! let cipher = Aes::new(&[0x2b; 16]).unwrap();
//! let cbc = Cbc::new(cipher, &Nonce::new([0u8; 16])).unwrap();
//!
//! let padded = Pkcs7::AES.pad(b"attack at dawn").unwrap();
//! let ciphertext = cbc.encrypt(&padded).unwrap();
//! let decrypted = cbc.decrypt(&ciphertext).unwrap();
//! assert_eq!(Pkcs7::AES.unpad(&decrypted).unwrap(), b"attack at dawn");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Finite-field arithmetic
pub mod gf256;

// Block cipher and modes
pub mod block;
pub use block::{
    Aes, Block, BlockCipher, Cbc, Ctr, Ecb, KeySchedule, KeySize, ModeKind,
    modes::increment_counter,
};

// Padding schemes
pub mod padding;
pub use padding::{AnsiX923, Padding, PaddingScheme, Pkcs5, Pkcs7};

// Type system
pub mod types;
pub use types::Nonce;

// Re-export security types from rijndael-common
pub use rijndael_common::{barrier, SecretBuffer};
