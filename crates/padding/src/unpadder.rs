//! Streaming unpadder with a one-block lag

use xycrypt_api::{validate, Error, Result, StreamingTransform};
use zeroize::Zeroize;

use crate::check::check;
use crate::PaddingKind;

/// Single-use unpadding state machine
///
/// `update` releases everything except the trailing remainder of at most
/// one block, which might still turn out to be the final padded block.
/// `finalize` requires that remainder to be exactly one block, validates the
/// pad and returns the block without it.
///
/// The default unpadder accepts chunks of any length. A strict unpadder
/// (see [`PaddingScheme::strict_unpadder`](crate::PaddingScheme::strict_unpadder))
/// rejects chunks that are not a whole number of blocks.
#[derive(Debug)]
pub struct Unpadder {
    kind: PaddingKind,
    block_size: usize,
    strict: bool,
    buffer: Vec<u8>,
    finalized: bool,
}

impl Unpadder {
    pub(crate) fn new(kind: PaddingKind, block_size: usize, strict: bool) -> Self {
        Self {
            kind,
            block_size,
            strict,
            buffer: Vec::with_capacity(2 * block_size),
            finalized: false,
        }
    }

    /// Bytes currently held back
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl StreamingTransform for Unpadder {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "unpadder update")?;
        if self.strict {
            validate::block_multiple("unpadder update", data.len(), self.block_size)?;
        }
        if self.kind == PaddingKind::None {
            return Ok(data.to_vec());
        }

        self.buffer.extend_from_slice(data);
        let len = self.buffer.len();
        let keep = match len % self.block_size {
            0 if len > 0 => self.block_size,
            r => r,
        };
        Ok(self.buffer.drain(..len - keep).collect())
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "unpadder finalize")?;
        self.finalized = true;
        if self.kind == PaddingKind::None {
            return Ok(Vec::new());
        }

        let mut block = core::mem::take(&mut self.buffer);
        if block.len() != self.block_size {
            block.zeroize();
            return Err(Error::incomplete_padding());
        }
        let outcome = check(self.kind, &block)
            .map(|padded_size| block[..self.block_size - padded_size].to_vec());
        block.zeroize();
        outcome
    }
}

impl Drop for Unpadder {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}
