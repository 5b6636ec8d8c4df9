//! SHA-2 hash streams backed by the RustCrypto `sha2` crate

use sha2::Digest;
use xycrypt_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
    SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

digest_stream!(
    /// SHA-224 hash stream
    Sha224, sha2::Sha224, "SHA224", SHA256_BLOCK_SIZE, SHA224_OUTPUT_SIZE
);
digest_stream!(
    /// SHA-256 hash stream
    Sha256, sha2::Sha256, "SHA256", SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE
);
digest_stream!(
    /// SHA-384 hash stream
    Sha384, sha2::Sha384, "SHA384", SHA512_BLOCK_SIZE, SHA384_OUTPUT_SIZE
);
digest_stream!(
    /// SHA-512 hash stream
    Sha512, sha2::Sha512, "SHA512", SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE
);
digest_stream!(
    /// SHA-512/224 hash stream
    Sha512_224, sha2::Sha512_224, "SHA512_224", SHA512_BLOCK_SIZE, SHA224_OUTPUT_SIZE
);
digest_stream!(
    /// SHA-512/256 hash stream
    Sha512_256, sha2::Sha512_256, "SHA512_256", SHA512_BLOCK_SIZE, SHA256_OUTPUT_SIZE
);
