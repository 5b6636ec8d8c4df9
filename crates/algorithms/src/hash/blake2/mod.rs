//! BLAKE2 hash streams backed by the RustCrypto `blake2` crate
//!
//! Unkeyed, at the full output length of each variant.

use blake2::Digest;
use xycrypt_params::utils::hash::{
    BLAKE2B_BLOCK_SIZE, BLAKE2B_OUTPUT_SIZE, BLAKE2S_BLOCK_SIZE, BLAKE2S_OUTPUT_SIZE,
};

digest_stream!(
    /// BLAKE2b-512 hash stream
    Blake2b, blake2::Blake2b512, "BLAKE2b", BLAKE2B_BLOCK_SIZE, BLAKE2B_OUTPUT_SIZE
);
digest_stream!(
    /// BLAKE2s-256 hash stream
    Blake2s, blake2::Blake2s256, "BLAKE2s", BLAKE2S_BLOCK_SIZE, BLAKE2S_OUTPUT_SIZE
);
