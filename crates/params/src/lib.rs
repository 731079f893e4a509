//! Constant values for the rijndael library
//!
//! This crate carries no code, only the fixed sizes every other crate in the
//! workspace agrees on.

#![no_std]

pub mod utils;
