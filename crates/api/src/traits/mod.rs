//! Capability traits for the streaming context framework
//!
//! Concrete padding codecs, cipher streams and hash streams satisfy these
//! traits structurally; nothing needs to be registered anywhere.

pub mod cipher;
pub mod hash;
pub mod transform;

pub use cipher::{CipherBackend, ModeKind};
pub use hash::HashStream;
pub use transform::StreamingTransform;
