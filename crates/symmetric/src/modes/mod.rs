//! Block cipher modes of operation as streaming transforms
//!
//! ECB and CBC emit whole blocks only and refuse a trailing partial block at
//! `finalize`; callers pad first. CFB, OFB and CTR turn the block primitive
//! into a keystream and accept input of any length.

use xycrypt_api::{validate, CipherBackend, Error, ModeKind, Result, StreamingTransform};

use crate::block::BlockPrimitive;

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// Which way a mode stream runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

/// A block mode together with its IV or nonce
#[derive(Clone, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc {
        /// Initialization vector, one block long
        iv: Vec<u8>,
    },
    /// Cipher feedback
    Cfb {
        /// Initialization vector, one block long
        iv: Vec<u8>,
    },
    /// Output feedback
    Ofb {
        /// Initialization vector, one block long
        iv: Vec<u8>,
    },
    /// Counter
    Ctr {
        /// Initial counter block
        nonce: Vec<u8>,
    },
}

/// Optional per-mode arguments for [`Mode::from_name`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeParams {
    /// Initialization vector for CBC, CFB and OFB
    pub iv: Option<Vec<u8>>,
    /// Nonce for CTR
    pub nonce: Option<Vec<u8>>,
}

impl ModeParams {
    /// Parameters carrying an initialization vector
    pub fn with_iv(iv: impl Into<Vec<u8>>) -> Self {
        Self {
            iv: Some(iv.into()),
            nonce: None,
        }
    }

    /// Parameters carrying a nonce
    pub fn with_nonce(nonce: impl Into<Vec<u8>>) -> Self {
        Self {
            iv: None,
            nonce: Some(nonce.into()),
        }
    }
}

impl Mode {
    /// Looks the mode up by name (case-insensitive) and takes the value it needs
    /// from `params`
    pub fn from_name(name: &str, params: ModeParams) -> Result<Self> {
        let kind: ModeKind = name.parse()?;
        let ModeParams { iv, nonce } = params;
        let iv = || iv.ok_or_else(|| Error::config("mode", "missing required argument: iv"));
        let nonce =
            || nonce.ok_or_else(|| Error::config("mode", "missing required argument: nonce"));
        match kind {
            ModeKind::Ecb => Ok(Mode::Ecb),
            ModeKind::Cbc => Ok(Mode::Cbc { iv: iv()? }),
            ModeKind::Cfb => Ok(Mode::Cfb { iv: iv()? }),
            ModeKind::Ofb => Ok(Mode::Ofb { iv: iv()? }),
            ModeKind::Ctr => Ok(Mode::Ctr { nonce: nonce()? }),
            ModeKind::Stream => Err(Error::config(
                "mode",
                "STREAM is a property of stream ciphers, not a block mode",
            )),
        }
    }

    /// Policy tag of this mode
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Ecb => ModeKind::Ecb,
            Mode::Cbc { .. } => ModeKind::Cbc,
            Mode::Cfb { .. } => ModeKind::Cfb,
            Mode::Ofb { .. } => ModeKind::Ofb,
            Mode::Ctr { .. } => ModeKind::Ctr,
        }
    }

    fn vector(&self) -> Option<&[u8]> {
        match self {
            Mode::Ecb => None,
            Mode::Cbc { iv } | Mode::Cfb { iv } | Mode::Ofb { iv } => Some(iv),
            Mode::Ctr { nonce } => Some(nonce),
        }
    }
}

impl core::fmt::Debug for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // IVs are public but long; the tag is enough in logs
        f.write_str(self.kind().name())
    }
}

/// Cipher backend driving a block primitive in one mode
#[derive(Debug, Clone)]
pub struct BlockModeBackend<B: BlockPrimitive> {
    cipher: B,
    mode: Mode,
}

impl<B: BlockPrimitive> BlockModeBackend<B> {
    /// Binds `cipher` to `mode`; the IV or nonce must be one block long
    pub fn new(cipher: B, mode: Mode) -> Result<Self> {
        if let Some(vector) = mode.vector() {
            let context = if mode.kind().requires_nonce() {
                "mode nonce"
            } else {
                "mode iv"
            };
            validate::length(context, vector.len(), cipher.block_size())?;
        }
        Ok(Self { cipher, mode })
    }

    /// The bound mode
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The block primitive
    pub fn primitive(&self) -> &B {
        &self.cipher
    }

    fn stream(&self, direction: Direction) -> Box<dyn StreamingTransform + Send> {
        let cipher = self.cipher.clone();
        match &self.mode {
            Mode::Ecb => Box::new(Ecb::new(cipher, direction)),
            Mode::Cbc { iv } => Box::new(Cbc::new(cipher, iv, direction)),
            Mode::Cfb { iv } => Box::new(Cfb::new(cipher, iv, direction)),
            Mode::Ofb { iv } => Box::new(Ofb::new(cipher, iv)),
            Mode::Ctr { nonce } => Box::new(Ctr::new(cipher, nonce)),
        }
    }
}

impl<B: BlockPrimitive> CipherBackend for BlockModeBackend<B> {
    fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn key_size(&self) -> Option<usize> {
        Some(self.cipher.key_size())
    }

    fn encryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        Ok(self.stream(Direction::Encrypt))
    }

    fn decryptor(&self) -> Result<Box<dyn StreamingTransform + Send>> {
        Ok(self.stream(Direction::Decrypt))
    }
}

/// Splits off the whole blocks of `pending`, leaving the partial tail behind
pub(crate) fn take_whole_blocks(pending: &mut Vec<u8>, block_size: usize) -> Vec<u8> {
    let ready = pending.len() - pending.len() % block_size;
    pending.drain(..ready).collect()
}

/// Error surfaced when an unpadded block mode is finalized mid-block
pub(crate) fn partial_block(mode: &'static str) -> Error {
    Error::backend(
        mode,
        "The length of the provided data is not a multiple of the block length.",
    )
}
