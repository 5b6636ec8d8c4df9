//! Cipher-stream capability and mode policy

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::traits::StreamingTransform;

/// Mode policy attached to a cipher
///
/// Feedback and counter modes run at arbitrary lengths and are treated as
/// stream ciphers by the composition layer; ECB and CBC operate on whole
/// blocks and are padded with PKCS7 unless the caller says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback (full block)
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter
    Ctr,
    /// Native stream cipher
    Stream,
}

impl ModeKind {
    /// Canonical upper-case name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
            Self::Ctr => "CTR",
            Self::Stream => "STREAM",
        }
    }

    /// Whether PKCS7 padding is applied when the caller does not choose
    pub const fn pads_by_default(&self) -> bool {
        matches!(self, Self::Ecb | Self::Cbc)
    }

    /// Whether the mode processes input of any length
    pub const fn is_stream(&self) -> bool {
        !self.pads_by_default()
    }

    /// Whether the mode takes an initialization vector
    pub const fn requires_iv(&self) -> bool {
        matches!(self, Self::Cbc | Self::Cfb | Self::Ofb)
    }

    /// Whether the mode takes a nonce
    pub const fn requires_nonce(&self) -> bool {
        matches!(self, Self::Ctr)
    }
}

impl FromStr for ModeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Self::Ecb),
            "CBC" => Ok(Self::Cbc),
            "CFB" => Ok(Self::Cfb),
            "OFB" => Ok(Self::Ofb),
            "CTR" => Ok(Self::Ctr),
            "STREAM" => Ok(Self::Stream),
            _ => Err(Error::config(
                "mode",
                format!(
                    "mode must be in {{ECB, CBC, CFB, OFB, CTR, STREAM}}, got {:?}",
                    s
                ),
            )),
        }
    }
}

impl core::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A cipher bound to an algorithm, key and mode by its backend
///
/// Each call to `encryptor`/`decryptor` returns a fresh, independent stream.
pub trait CipherBackend {
    /// Mode policy of this cipher
    fn mode_kind(&self) -> ModeKind;

    /// Block size of the underlying primitive in bytes
    fn block_size(&self) -> usize;

    /// Length of the bound key in bytes, when the backend knows it
    fn key_size(&self) -> Option<usize> {
        None
    }

    /// Fresh encrypting stream
    fn encryptor(&self) -> Result<Box<dyn StreamingTransform + Send>>;

    /// Fresh decrypting stream
    fn decryptor(&self) -> Result<Box<dyn StreamingTransform + Send>>;
}
