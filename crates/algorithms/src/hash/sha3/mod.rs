//! SHA-3 hash streams backed by the RustCrypto `sha3` crate
//!
//! `BLOCK_SIZE` is the sponge rate, which is also what HMAC pads the key to.

use sha3::Digest;
use xycrypt_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA3_224_BLOCK_SIZE,
    SHA3_256_BLOCK_SIZE, SHA3_384_BLOCK_SIZE, SHA3_512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

digest_stream!(
    /// SHA3-224 hash stream
    Sha3_224, sha3::Sha3_224, "SHA3_224", SHA3_224_BLOCK_SIZE, SHA224_OUTPUT_SIZE
);
digest_stream!(
    /// SHA3-256 hash stream
    Sha3_256, sha3::Sha3_256, "SHA3_256", SHA3_256_BLOCK_SIZE, SHA256_OUTPUT_SIZE
);
digest_stream!(
    /// SHA3-384 hash stream
    Sha3_384, sha3::Sha3_384, "SHA3_384", SHA3_384_BLOCK_SIZE, SHA384_OUTPUT_SIZE
);
digest_stream!(
    /// SHA3-512 hash stream
    Sha3_512, sha3::Sha3_512, "SHA3_512", SHA3_512_BLOCK_SIZE, SHA512_OUTPUT_SIZE
);
