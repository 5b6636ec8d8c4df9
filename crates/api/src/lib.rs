//! Public API traits and types for the xycrypt library
//!
//! This crate provides the public API surface for the xycrypt ecosystem: the
//! error taxonomy shared by every component and the narrow capability traits
//! through which padding codecs, cipher streams and hash streams are composed.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, PaddingFailure, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{CipherBackend, HashStream, ModeKind, StreamingTransform};
