//! Constant values for xycrypt streaming operations
//!
//! Block sizes, key sizes and framing constants shared by the padding,
//! symmetric and digest crates.

#![no_std]

pub mod utils;
