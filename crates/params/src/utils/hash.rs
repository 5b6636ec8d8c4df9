//! Constants for hash functions and HMAC

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Internal block size of SHA-224 and SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of the SHA-512 family in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Byte XORed into the key to derive the HMAC inner pad
pub const HMAC_IPAD_BYTE: u8 = 0x36;

/// Byte XORed into the key to derive the HMAC outer pad
pub const HMAC_OPAD_BYTE: u8 = 0x5c;

/// Chunk size used when hashing readers and files (1 MiB)
pub const CHUNK_SIZE: usize = 0x10_0000;

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size of MD5 and SHA-1 in bytes
pub const MD5_SHA1_BLOCK_SIZE: usize = 64;

/// Rate of SHA3-224 in bytes
pub const SHA3_224_BLOCK_SIZE: usize = 144;

/// Rate of SHA3-256 in bytes
pub const SHA3_256_BLOCK_SIZE: usize = 136;

/// Rate of SHA3-384 in bytes
pub const SHA3_384_BLOCK_SIZE: usize = 104;

/// Rate of SHA3-512 in bytes
pub const SHA3_512_BLOCK_SIZE: usize = 72;

/// Rate of SHAKE128 in bytes
pub const SHAKE128_BLOCK_SIZE: usize = 168;

/// Rate of SHAKE256 in bytes
pub const SHAKE256_BLOCK_SIZE: usize = 136;

/// Default SHAKE128 output size in bytes
pub const SHAKE128_DEFAULT_OUTPUT_SIZE: usize = 16;

/// Default SHAKE256 output size in bytes
pub const SHAKE256_DEFAULT_OUTPUT_SIZE: usize = 32;

/// Internal block size of BLAKE2b in bytes
pub const BLAKE2B_BLOCK_SIZE: usize = 128;

/// Output size of BLAKE2b-512 in bytes
pub const BLAKE2B_OUTPUT_SIZE: usize = 64;

/// Internal block size of BLAKE2s in bytes
pub const BLAKE2S_BLOCK_SIZE: usize = 64;

/// Output size of BLAKE2s-256 in bytes
pub const BLAKE2S_OUTPUT_SIZE: usize = 32;
