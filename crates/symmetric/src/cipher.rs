//! The cipher entity: descriptor, bound backend and padding

use xycrypt_api::{validate, CipherBackend, Result, StreamingTransform};
use xycrypt_common::{decrypt_then_unpad, pad_then_encrypt};
use xycrypt_padding::{PaddingKind, PaddingScheme};
use xycrypt_params::utils::symmetric::{
    AES_BLOCK_SIZE, AES_KEY_SIZES, CHACHA20_KEY_SIZE, STREAM_CIPHER_BLOCK_SIZE,
    TRIPLE_DES_BLOCK_SIZE, TRIPLE_DES_KEY_SIZES,
};

use crate::block::{Aes, TripleDes};
use crate::modes::{BlockModeBackend, Mode};
use crate::stream::ChaCha20Backend;

/// Fixed facts about a cipher algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherDescriptor {
    /// Algorithm name
    pub name: &'static str,
    /// Block size in bytes
    pub block_size: usize,
    /// Accepted key lengths in bytes
    pub key_sizes: &'static [usize],
}

impl CipherDescriptor {
    /// Whether `len` is an accepted key length
    pub fn accepts_key_size(&self, len: usize) -> bool {
        self.key_sizes.contains(&len)
    }
}

/// AES: 16-byte blocks, 128/192/256-bit keys
pub const AES: CipherDescriptor = CipherDescriptor {
    name: "AES",
    block_size: AES_BLOCK_SIZE,
    key_sizes: &AES_KEY_SIZES,
};

/// Triple DES: 8-byte blocks, two- or three-key
pub const TRIPLE_DES: CipherDescriptor = CipherDescriptor {
    name: "TripleDES",
    block_size: TRIPLE_DES_BLOCK_SIZE,
    key_sizes: &TRIPLE_DES_KEY_SIZES,
};

/// ChaCha20: native stream cipher with a 256-bit key
pub const CHACHA20: CipherDescriptor = CipherDescriptor {
    name: "ChaCha20",
    block_size: STREAM_CIPHER_BLOCK_SIZE,
    key_sizes: &[CHACHA20_KEY_SIZE],
};

/// How a [`Cipher`] picks its padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// PKCS7 for ECB and CBC, no padding for feedback, counter and stream
    /// modes
    #[default]
    ModeDefault,
    /// Never pad
    Disabled,
    /// Always use this scheme, even for modes that do not need it
    Scheme(PaddingKind),
}

/// A cipher bound to a key and mode, with an optional padding scheme
///
/// Every call to [`encryptor`](Cipher::encryptor) or
/// [`decryptor`](Cipher::decryptor) returns a fresh stream; the cipher
/// itself carries no per-message state.
#[derive(Debug, Clone)]
pub struct Cipher<C: CipherBackend> {
    descriptor: CipherDescriptor,
    backend: C,
    padding: Option<PaddingScheme>,
}

impl<C: CipherBackend> Cipher<C> {
    /// Wraps `backend`, resolving `policy` against its mode
    pub fn new(descriptor: CipherDescriptor, backend: C, policy: PaddingPolicy) -> Result<Self> {
        validate::parameter(
            descriptor.block_size == backend.block_size(),
            "cipher",
            "backend block size differs from the descriptor",
        )?;
        let kind = backend.mode_kind();
        let padding = match policy {
            PaddingPolicy::ModeDefault if kind.pads_by_default() => Some(PaddingKind::Pkcs7),
            PaddingPolicy::ModeDefault | PaddingPolicy::Disabled => None,
            PaddingPolicy::Scheme(padding) => Some(padding),
        }
        .map(|padding| PaddingScheme::new(padding, descriptor.block_size))
        .transpose()?;

        tracing::debug!(
            algorithm = descriptor.name,
            mode = kind.name(),
            padding = padding.map(|p| p.kind().name()),
            "cipher created"
        );
        Ok(Self {
            descriptor,
            backend,
            padding,
        })
    }

    /// Algorithm facts
    pub fn descriptor(&self) -> &CipherDescriptor {
        &self.descriptor
    }

    /// The bound backend
    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// The resolved padding scheme, if any
    pub fn padding(&self) -> Option<PaddingScheme> {
        self.padding
    }

    /// Key length in bytes, as reported by the backend
    pub fn key_size(&self) -> Option<usize> {
        self.backend.key_size()
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.descriptor.block_size
    }

    /// Fresh encrypting stream, padding first when a scheme is set
    pub fn encryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        let encryptor = self.backend.encryptor()?;
        let stream: Box<dyn StreamingTransform + Send> = match self.padding {
            Some(scheme) => Box::new(pad_then_encrypt(encryptor, scheme.padder())),
            None => encryptor,
        };
        Ok(stream)
    }

    /// Fresh decrypting stream, unpadding last when a scheme is set
    pub fn decryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        let decryptor = self.backend.decryptor()?;
        let stream: Box<dyn StreamingTransform + Send> = match self.padding {
            Some(scheme) => Box::new(decrypt_then_unpad(scheme.unpadder(), decryptor)),
            None => decryptor,
        };
        Ok(stream)
    }

    /// Decrypting stream for a ciphertext of exactly `total` bytes
    ///
    /// Plaintext is released as soon as it is known not to belong to the
    /// final block, instead of lagging one block behind. The total is
    /// enforced with or without a padding scheme: more input fails with
    /// `too much data`, and finalizing short of it is a size error.
    pub fn decryptor_with_total(&self, total: usize) -> Result<Box<dyn StreamingTransform + Send>> {
        let scheme = match self.padding {
            Some(scheme) => scheme,
            None => PaddingScheme::new(PaddingKind::None, self.descriptor.block_size)?,
        };
        let unpadder = scheme.fast_unpadder(total)?;
        let decryptor = self.backend.decryptor()?;
        Ok(Box::new(decrypt_then_unpad(unpadder, decryptor)))
    }

    /// Encrypts `data` in one call
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encryptor()?.process(data)
    }

    /// Decrypts `data` in one call
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decryptor()?.process(data)
    }
}

impl Cipher<BlockModeBackend<Aes>> {
    /// AES in `mode`; the variant follows the key length
    pub fn aes(key: &[u8], mode: Mode, policy: PaddingPolicy) -> Result<Self> {
        let backend = BlockModeBackend::new(Aes::new(key)?, mode)?;
        Self::new(AES, backend, policy)
    }
}

impl Cipher<BlockModeBackend<TripleDes>> {
    /// Triple DES in `mode`; the keying option follows the key length
    pub fn triple_des(key: &[u8], mode: Mode, policy: PaddingPolicy) -> Result<Self> {
        let backend = BlockModeBackend::new(TripleDes::new(key)?, mode)?;
        Self::new(TRIPLE_DES, backend, policy)
    }
}

impl Cipher<ChaCha20Backend> {
    /// ChaCha20 with a 16-byte nonce (initial counter, then IETF nonce)
    pub fn chacha20(key: &[u8], nonce: &[u8], policy: PaddingPolicy) -> Result<Self> {
        Self::new(CHACHA20, ChaCha20Backend::new(key, nonce)?, policy)
    }
}
