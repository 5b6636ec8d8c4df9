//! Hash streams, keyed digests and aggregate digests
//!
//! Everything here consumes the same [`HashStream`] contract: a hash context
//! with `update`, a non-destructive `finalize` and `copy`.
//!
//! - [`hash`] adapts the RustCrypto MD5, SHA-1, SHA-2, SHA-3, SHAKE and
//!   BLAKE2 crates and provides one-shot, reader, file and directory helpers.
//! - [`mac::Hmac`] builds a keyed digest from two hash streams.
//! - [`aggregate`] folds equal-size digests into one order-independent value.
//!
//! The `std` feature (on by default) enables the filesystem helpers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aggregate;
pub mod hash;
pub mod mac;

pub use aggregate::{xor_fold, AggregateDigest};
#[cfg(feature = "std")]
pub use aggregate::digest_tree;
pub use hash::{
    hash, hash_iter, hash_reader, Blake2b, Blake2s, Md5, Sha1, Sha224, Sha256, Sha384, Sha3_224,
    Sha3_256, Sha3_384, Sha3_512, Sha512, Sha512_224, Sha512_256, Shake128, Shake256,
};
#[cfg(feature = "std")]
pub use hash::{hash_dir, hash_file, hash_fs};
pub use mac::Hmac;

pub use xycrypt_api::{Error, HashStream, Result};
