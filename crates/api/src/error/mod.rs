//! Error handling for the streaming context framework

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, PaddingFailure, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(test)]
mod tests;
