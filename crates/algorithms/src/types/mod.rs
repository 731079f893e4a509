//! Type-safe wrappers for cipher inputs
//!
//! Initialization vectors and initial counter blocks are carried as
//! [`Nonce<N>`], whose size is fixed at compile time so the mode constructors
//! cannot be handed a value of the wrong length.

pub mod nonce;

pub use nonce::Nonce;
