//! # xycrypt
//!
//! A streaming cryptographic context framework: padding codecs that work
//! across arbitrarily chunked input, composition of padding streams with
//! cipher streams, HMAC built from hash streams and order-independent
//! aggregate digests.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xycrypt = "0.3"
//! ```
//!
//! ```
//! use xycrypt::prelude::*;
//!
//! let cipher = Cipher::aes(&[7u8; 16], Mode::Cbc { iv: vec![0u8; 16] }, PaddingPolicy::ModeDefault)?;
//! let mut enc = cipher.encryptor()?;
//! let mut ct = enc.update(b"attack at ")?;
//! ct.extend(enc.update(b"dawn")?);
//! ct.extend(enc.finalize()?);
//! assert_eq!(ct.len(), 16);
//! assert_eq!(cipher.decrypt(&ct)?, b"attack at dawn");
//!
//! let tag = Hmac::<Sha256>::mac(b"key", b"message");
//! let mut h = Hmac::<Sha256>::new(b"key");
//! h.update(b"message");
//! assert!(h.verify(&tag));
//! # Ok::<(), xycrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): filesystem digest helpers (`hash_file`, `hash_dir`, ...)
//! - `algorithms` (default): hash adapters, HMAC, aggregate digests
//! - `symmetric` (default): block modes and the cipher entity
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`xycrypt-api`]: error type and capability traits
//! - [`xycrypt-padding`]: padding schemes and their streams
//! - [`xycrypt-common`]: stream composition
//! - [`xycrypt-algorithms`]: hash streams, HMAC, aggregate digests
//! - [`xycrypt-symmetric`]: block modes and ciphers

// Core re-exports (always available)
pub use xycrypt_api as api;
pub use xycrypt_common as common;
pub use xycrypt_internal as internal;
pub use xycrypt_padding as padding;
pub use xycrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use xycrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use xycrypt_symmetric as symmetric;

/// Common imports for xycrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Capability traits
    pub use crate::api::{CipherBackend, HashStream, ModeKind, StreamingTransform};

    // Padding and composition
    pub use crate::common::ComposedTransform;
    pub use crate::padding::{FastUnpadder, Padder, PaddingKind, PaddingScheme, Unpadder};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        xor_fold, AggregateDigest, Blake2b, Blake2s, Hmac, Md5, Sha1, Sha224, Sha256, Sha384,
        Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha512, Sha512_224, Sha512_256, Shake128,
        Shake256,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Cipher, Mode, ModeParams, PaddingPolicy};
}
