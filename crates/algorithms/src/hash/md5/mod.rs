//! MD5 hash stream backed by the RustCrypto `md-5` crate
//!
//! Kept for digesting legacy content; MD5 is not collision resistant.

use md5::Digest;
use xycrypt_params::utils::hash::{MD5_OUTPUT_SIZE, MD5_SHA1_BLOCK_SIZE};

digest_stream!(
    /// MD5 hash stream
    Md5, md5::Md5, "MD5", MD5_SHA1_BLOCK_SIZE, MD5_OUTPUT_SIZE
);
