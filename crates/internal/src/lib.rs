//! Internal utilities for the rijndael library
//!
//! Nothing in here is part of the public cipher API; the helpers exist so the
//! padding validators and mode layer share one vetted implementation of each
//! constant-time primitive.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_all_equal, ct_eq, ct_lt, xor_in_place};
