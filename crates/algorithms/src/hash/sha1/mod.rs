//! SHA-1 hash stream backed by the RustCrypto `sha1` crate

use sha1::Digest;
use xycrypt_params::utils::hash::{MD5_SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

digest_stream!(
    /// SHA-1 hash stream
    Sha1, sha1::Sha1, "SHA1", MD5_SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE
);
