//! Streaming padder

use rand::rngs::OsRng;
use rand::RngCore;
use xycrypt_api::{validate, Error, Result, StreamingTransform};

use crate::PaddingKind;

/// Single-use padding state machine
///
/// Data passes through `update` unchanged; only its length is recorded.
/// `finalize` returns the pad, between 1 and `block_size` bytes. A message
/// that is already block aligned still receives a full block of padding.
#[derive(Debug)]
pub struct Padder {
    kind: PaddingKind,
    block_size: usize,
    size: usize,
    finalized: bool,
}

impl Padder {
    pub(crate) fn new(kind: PaddingKind, block_size: usize) -> Self {
        Self {
            kind,
            block_size,
            size: 0,
            finalized: false,
        }
    }

    /// Bytes seen so far
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether no bytes have been seen yet
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn pad(&self, padded_size: usize) -> Result<Vec<u8>> {
        // block_size <= 255, so the length always fits one byte
        let len_byte = padded_size as u8;
        let pad = match self.kind {
            PaddingKind::None => Vec::new(),
            PaddingKind::Pkcs7 => vec![len_byte; padded_size],
            PaddingKind::AnsiX923 => {
                let mut pad = vec![0u8; padded_size];
                pad[padded_size - 1] = len_byte;
                pad
            }
            PaddingKind::Iso10126 => {
                let mut pad = vec![0u8; padded_size];
                OsRng
                    .try_fill_bytes(&mut pad[..padded_size - 1])
                    .map_err(|e| Error::backend("ISO 10126 filler", e.to_string()))?;
                pad[padded_size - 1] = len_byte;
                pad
            }
        };
        Ok(pad)
    }
}

impl StreamingTransform for Padder {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "padder update")?;
        self.size += data.len();
        Ok(data.to_vec())
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "padder finalize")?;
        self.finalized = true;
        let padded_size = self.block_size - (self.size % self.block_size);
        self.pad(padded_size)
    }
}
