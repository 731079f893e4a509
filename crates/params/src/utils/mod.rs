//! Constant values for rijndael cryptographic operations

pub mod symmetric;
