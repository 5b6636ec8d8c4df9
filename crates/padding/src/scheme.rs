//! Padding scheme descriptors

use core::fmt;
use core::str::FromStr;

use xycrypt_api::{validate, Error, Result, StreamingTransform};
use xycrypt_params::utils::padding::{MAX_PADDING_BLOCK_SIZE, MIN_PADDING_BLOCK_SIZE};

use crate::{FastUnpadder, Padder, Unpadder};

/// The closed set of supported padding rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingKind {
    /// Pass-through: nothing is added or removed
    None,
    /// Every pad byte holds the pad length
    Pkcs7,
    /// Zero bytes followed by one length byte
    AnsiX923,
    /// Random bytes followed by one length byte
    Iso10126,
}

impl PaddingKind {
    /// Canonical upper-case name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pkcs7 => "PKCS7",
            Self::AnsiX923 => "ANSIX923",
            Self::Iso10126 => "ISO10126",
        }
    }
}

impl FromStr for PaddingKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" | "DUMMY" | "N" | "D" => Ok(Self::None),
            "PKCS7" | "P" => Ok(Self::Pkcs7),
            "ANSIX923" | "A" => Ok(Self::AnsiX923),
            "ISO10126" | "I" => Ok(Self::Iso10126),
            _ => Err(Error::config(
                "padding",
                format!(
                    "padding must be in {{NONE, PKCS7, ANSIX923, ISO10126}}, got {:?}",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for PaddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable padding rule bound to one block size
///
/// The block size is validated once here; every padder and unpadder derived
/// from the scheme inherits it for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddingScheme {
    kind: PaddingKind,
    block_size: usize,
}

impl PaddingScheme {
    /// Creates a scheme, rejecting block sizes outside `[1, 255]`
    pub fn new(kind: PaddingKind, block_size: usize) -> Result<Self> {
        validate::block_size(
            "padding block_size",
            block_size,
            MIN_PADDING_BLOCK_SIZE,
            MAX_PADDING_BLOCK_SIZE,
        )?;
        tracing::trace!(kind = kind.name(), block_size, "padding scheme created");
        Ok(Self { kind, block_size })
    }

    /// Looks the kind up by name (case-insensitive) and creates a scheme
    pub fn from_name(name: &str, block_size: usize) -> Result<Self> {
        Self::new(name.parse()?, block_size)
    }

    /// The padding rule
    pub fn kind(&self) -> PaddingKind {
        self.kind
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Fresh padder
    pub fn padder(&self) -> Padder {
        Padder::new(self.kind, self.block_size)
    }

    /// Fresh unpadder accepting arbitrarily sized chunks
    pub fn unpadder(&self) -> Unpadder {
        Unpadder::new(self.kind, self.block_size, false)
    }

    /// Fresh unpadder that rejects chunks which are not whole blocks
    pub fn strict_unpadder(&self) -> Unpadder {
        Unpadder::new(self.kind, self.block_size, true)
    }

    /// Fresh unpadder for a ciphertext of exactly `total` bytes
    pub fn fast_unpadder(&self, total: usize) -> Result<FastUnpadder> {
        FastUnpadder::new(self.kind, self.block_size, total)
    }

    /// Pads `data` in one call
    pub fn pad(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.padder().process(data)
    }

    /// Unpads `data` in one call
    pub fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.unpadder().process(data)
    }
}
