//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Key sizes accepted by AES, in bytes
pub const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// Two-key Triple DES (K1, K2, K1) key size in bytes
pub const TRIPLE_DES_EDE2_KEY_SIZE: usize = 16;

/// Three-key Triple DES key size in bytes
pub const TRIPLE_DES_EDE3_KEY_SIZE: usize = 24;

/// Triple DES block size in bytes
pub const TRIPLE_DES_BLOCK_SIZE: usize = 8;

/// Key sizes accepted by Triple DES, in bytes
pub const TRIPLE_DES_KEY_SIZES: [usize; 2] = [TRIPLE_DES_EDE2_KEY_SIZE, TRIPLE_DES_EDE3_KEY_SIZE];

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes: a 4-byte little-endian initial block
/// counter followed by the 12-byte IETF nonce
pub const CHACHA20_NONCE_SIZE: usize = 16;

/// Size of one ChaCha20 keystream block in bytes
pub const CHACHA20_BLOCK_BYTES: u64 = 64;

/// Nominal block size reported by native stream ciphers
pub const STREAM_CIPHER_BLOCK_SIZE: usize = 1;
