//! Internal utilities for the xycrypt library
//!
//! Constant-time comparisons and masks used by padding validation and HMAC
//! verification, plus byte-wise XOR helpers shared by the mode streams and
//! the aggregate digest.

#![no_std]

pub mod constant_time;
pub mod xor;

pub use constant_time::{ct_eq, ct_eq_mask, ct_le_mask};
pub use xor::{xor_in_place, xor_into};
