//! Native stream ciphers
//!
//! These backends report [`ModeKind::Stream`]: input of any length, no
//! padding unless the caller forces a scheme.

use core::fmt;

use byteorder::{ByteOrder, LittleEndian};
use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::{ChaCha20, Key, Nonce};
use zeroize::Zeroizing;

use xycrypt_api::{
    validate, CipherBackend, Error, ModeKind, Result, ResultExt, StreamingTransform,
};
use xycrypt_params::utils::symmetric::{
    CHACHA20_BLOCK_BYTES, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE, STREAM_CIPHER_BLOCK_SIZE,
};

/// ChaCha20 bound to a key and a 16-byte nonce
///
/// The nonce holds a 4-byte little-endian initial block counter followed by
/// the 12-byte IETF nonce, so a stream can start at any keystream block.
#[derive(Clone)]
pub struct ChaCha20Backend {
    key: Zeroizing<[u8; CHACHA20_KEY_SIZE]>,
    nonce: [u8; CHACHA20_NONCE_SIZE],
}

impl ChaCha20Backend {
    /// Binds `key` (32 bytes) and `nonce` (16 bytes)
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        if key.len() != CHACHA20_KEY_SIZE {
            return Err(Error::backend(
                "ChaCha20 key",
                format!("Invalid key size ({}) for ChaCha20", key.len() * 8),
            ));
        }
        validate::length("ChaCha20 nonce", nonce.len(), CHACHA20_NONCE_SIZE)?;

        let mut key_buf = Zeroizing::new([0u8; CHACHA20_KEY_SIZE]);
        key_buf.copy_from_slice(key);
        let mut nonce_buf = [0u8; CHACHA20_NONCE_SIZE];
        nonce_buf.copy_from_slice(nonce);
        Ok(Self {
            key: key_buf,
            nonce: nonce_buf,
        })
    }

    /// Initial block counter carried in the nonce
    pub fn initial_counter(&self) -> u32 {
        LittleEndian::read_u32(&self.nonce[..4])
    }

    fn stream(&self) -> Result<ChaCha20Stream> {
        let mut cipher = ChaCha20::new(
            Key::from_slice(&self.key[..]),
            Nonce::from_slice(&self.nonce[4..]),
        );
        cipher
            .try_seek(u64::from(self.initial_counter()) * CHACHA20_BLOCK_BYTES)
            .backend_err("ChaCha20")?;
        Ok(ChaCha20Stream {
            cipher,
            finalized: false,
        })
    }
}

impl fmt::Debug for ChaCha20Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaCha20 { .. }")
    }
}

impl CipherBackend for ChaCha20Backend {
    fn mode_kind(&self) -> ModeKind {
        ModeKind::Stream
    }

    fn block_size(&self) -> usize {
        STREAM_CIPHER_BLOCK_SIZE
    }

    fn key_size(&self) -> Option<usize> {
        Some(CHACHA20_KEY_SIZE)
    }

    fn encryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        Ok(Box::new(self.stream()?))
    }

    fn decryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        Ok(Box::new(self.stream()?))
    }
}

/// Keystream XOR; encryption and decryption are the same operation
pub struct ChaCha20Stream {
    cipher: ChaCha20,
    finalized: bool,
}

impl StreamingTransform for ChaCha20Stream {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "ChaCha20 update")?;
        let mut out = data.to_vec();
        // Fails only once the 32-bit block counter is exhausted
        self.cipher
            .try_apply_keystream(&mut out)
            .backend_err("ChaCha20")?;
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "ChaCha20 finalize")?;
        self.finalized = true;
        Ok(Vec::new())
    }
}
