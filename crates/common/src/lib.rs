//! Common implementations and shared functionality for the xycrypt library
//!
//! This crate provides the composition algebra used across xycrypt
//! components: two independently built streaming transforms glued into one.

pub mod compose;

pub use compose::{decrypt_then_unpad, pad_then_encrypt, ComposedTransform};
