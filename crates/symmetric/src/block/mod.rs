//! Raw block primitives supplied by the cipher backend

use core::fmt;

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};
use des::{TdesEde2, TdesEde3};
use xycrypt_api::{Error, Result, ResultExt};
use xycrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, TRIPLE_DES_BLOCK_SIZE,
    TRIPLE_DES_EDE2_KEY_SIZE, TRIPLE_DES_EDE3_KEY_SIZE,
};

/// A keyed block transform
///
/// `block` is always exactly `block_size()` bytes long.
pub trait BlockPrimitive: Clone + Send + 'static {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Key length in bytes
    fn key_size(&self) -> usize;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]);
}

/// AES keyed with a 128, 192 or 256-bit key
#[derive(Clone)]
pub enum Aes {
    /// AES-128
    Aes128(Aes128),
    /// AES-192
    Aes192(Aes192),
    /// AES-256
    Aes256(Aes256),
}

impl Aes {
    /// Selects the AES variant from the key length
    pub fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            AES128_KEY_SIZE => Aes128::new_from_slice(key)
                .map(Self::Aes128)
                .backend_err("AES key"),
            AES192_KEY_SIZE => Aes192::new_from_slice(key)
                .map(Self::Aes192)
                .backend_err("AES key"),
            AES256_KEY_SIZE => Aes256::new_from_slice(key)
                .map(Self::Aes256)
                .backend_err("AES key"),
            n => Err(Error::backend(
                "AES key",
                format!("Invalid key size ({}) for AES", n * 8),
            )),
        }
    }

}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes{} {{ .. }}", self.key_size() * 8)
    }
}

impl BlockPrimitive for Aes {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        match self {
            Self::Aes128(_) => AES128_KEY_SIZE,
            Self::Aes192(_) => AES192_KEY_SIZE,
            Self::Aes256(_) => AES256_KEY_SIZE,
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = Block::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = Block::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// Triple DES in encrypt-decrypt-encrypt form
///
/// A 16-byte key is the two-key variant (K1, K2, K1); a 24-byte key uses
/// three independent keys.
#[derive(Clone)]
pub enum TripleDes {
    /// Two-key Triple DES
    Ede2(TdesEde2),
    /// Three-key Triple DES
    Ede3(TdesEde3),
}

impl TripleDes {
    /// Selects the keying option from the key length
    pub fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            TRIPLE_DES_EDE2_KEY_SIZE => TdesEde2::new_from_slice(key)
                .map(Self::Ede2)
                .backend_err("TripleDES key"),
            TRIPLE_DES_EDE3_KEY_SIZE => TdesEde3::new_from_slice(key)
                .map(Self::Ede3)
                .backend_err("TripleDES key"),
            n => Err(Error::backend(
                "TripleDES key",
                format!("Invalid key size ({}) for TripleDES", n * 8),
            )),
        }
    }
}

impl fmt::Debug for TripleDes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ede2(_) => f.write_str("TdesEde2 { .. }"),
            Self::Ede3(_) => f.write_str("TdesEde3 { .. }"),
        }
    }
}

impl BlockPrimitive for TripleDes {
    fn block_size(&self) -> usize {
        TRIPLE_DES_BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        match self {
            Self::Ede2(_) => TRIPLE_DES_EDE2_KEY_SIZE,
            Self::Ede3(_) => TRIPLE_DES_EDE3_KEY_SIZE,
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = des::cipher::Block::<TdesEde3>::from_mut_slice(block);
        match self {
            Self::Ede2(c) => c.encrypt_block(block),
            Self::Ede3(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = des::cipher::Block::<TdesEde3>::from_mut_slice(block);
        match self {
            Self::Ede2(c) => c.decrypt_block(block),
            Self::Ede3(c) => c.decrypt_block(block),
        }
    }
}
