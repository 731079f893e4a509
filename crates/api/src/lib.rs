//! Public API traits and types for the rijndael library
//!
//! This crate provides the public API surface shared by the engine crates:
//! the error type every fallible operation ends up returning, and the trait
//! the high-level bulk cipher implements.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

#[cfg(feature = "alloc")]
pub use traits::SymmetricCipher;
