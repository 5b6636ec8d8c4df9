//! Error type definitions for streaming operations

use std::borrow::Cow;

/// Which padding check rejected a buffer at `finalize`
///
/// Only two outcomes are ever reported. The length byte check and the
/// content check collapse into [`PaddingFailure::Invalid`] so a caller cannot
/// tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingFailure {
    /// The trailing buffer was not exactly one block long
    Incomplete,
    /// The pad length byte or the pad content did not match the scheme
    Invalid,
}

impl core::fmt::Display for PaddingFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Incomplete => f.write_str("incomplete padding"),
            Self::Invalid => f.write_str("invalid padding"),
        }
    }
}

/// Primary error type for streaming cryptographic operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid construction parameter: block size, scheme or mode name,
    /// missing IV or nonce
    #[error("{context}: {message}")]
    Config {
        /// Parameter or component that was misconfigured
        context: &'static str,
        /// Human readable reason
        message: Cow<'static, str>,
    },

    /// Padding rejected at `finalize`
    #[error("{0}")]
    Padding(PaddingFailure),

    /// Input size violates a declared or required length
    #[error("{context}: {message}")]
    Size {
        /// Operation that received the data
        context: &'static str,
        /// Human readable reason
        message: Cow<'static, str>,
    },

    /// A context was driven after it was finalized
    #[error("{context}: {message}")]
    State {
        /// Operation that was attempted
        context: &'static str,
        /// Human readable reason
        message: &'static str,
    },

    /// Failure surfaced by a cipher or hash backend
    #[error("{component}: {message}")]
    Backend {
        /// Backend component that failed
        component: &'static str,
        /// Message reported by the backend
        message: String,
    },

    /// Failure reading a byte source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for streaming operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `Config` error
    pub fn config<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::Config {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `Size` error
    pub fn size<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::Size {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `State` error
    pub fn state(context: &'static str, message: &'static str) -> Self {
        Error::State { context, message }
    }

    /// Shorthand to create a `Backend` error
    pub fn backend(component: &'static str, message: impl Into<String>) -> Self {
        Error::Backend {
            component,
            message: message.into(),
        }
    }

    /// The `incomplete padding` error
    pub const fn incomplete_padding() -> Self {
        Error::Padding(PaddingFailure::Incomplete)
    }

    /// The `invalid padding` error
    pub const fn invalid_padding() -> Self {
        Error::Padding(PaddingFailure::Invalid)
    }

    /// Returns true for padding failures
    pub fn is_padding(&self) -> bool {
        matches!(self, Error::Padding(_))
    }
}
