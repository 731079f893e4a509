//! Traits implemented by the rijndael engine crates

#[cfg(feature = "alloc")]
pub mod symmetric;

#[cfg(feature = "alloc")]
pub use symmetric::SymmetricCipher;
