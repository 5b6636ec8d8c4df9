//! Streaming block padding codecs
//!
//! A [`PaddingScheme`] is an immutable `(kind, block_size)` pair. It hands out
//! fresh single-use state machines:
//!
//! - [`Padder`] counts the bytes streaming through and appends the pad at
//!   `finalize`; data itself passes through untouched.
//! - [`Unpadder`] holds back the trailing block (it may still be the last
//!   one) and strips the pad at `finalize`.
//! - [`FastUnpadder`] knows the total ciphertext length up front and only
//!   retains the true final block.
//!
//! Supported kinds are PKCS#7, ANSI X9.23, ISO 10126 and a pass-through
//! `None` scheme.
//!
//! ```
//! use xycrypt_padding::{PaddingKind, PaddingScheme, StreamingTransform};
//!
//! let scheme = PaddingScheme::new(PaddingKind::Pkcs7, 8).unwrap();
//! let mut padder = scheme.padder();
//! let mut out = padder.update(b"hello").unwrap();
//! out.extend(padder.finalize().unwrap());
//! assert_eq!(out, b"hello\x03\x03\x03");
//! assert_eq!(scheme.unpad(&out).unwrap(), b"hello");
//! ```

mod check;
pub mod fast;
pub mod padder;
pub mod scheme;
pub mod unpadder;

pub use fast::FastUnpadder;
pub use padder::Padder;
pub use scheme::{PaddingKind, PaddingScheme};
pub use unpadder::Unpadder;

pub use xycrypt_api::{Error, Result, StreamingTransform};
