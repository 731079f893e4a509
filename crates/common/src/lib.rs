//! Shared functionality for the rijndael library
//!
//! Key material and expanded key schedules never live in plain arrays: they are
//! held in the zeroizing containers defined here.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::SecretVec;

// Re-export memory barrier utilities
pub use security::barrier;
