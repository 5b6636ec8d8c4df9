//! Constant values grouped by concern

pub mod hash;
pub mod padding;
pub mod symmetric;
