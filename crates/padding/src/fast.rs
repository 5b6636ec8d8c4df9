//! Unpadder for ciphertexts of known total length

use xycrypt_api::{validate, Error, Result, StreamingTransform};
use zeroize::Zeroize;

use crate::check::check;
use crate::PaddingKind;

/// Unpadder that knows the total ciphertext length in advance
///
/// Bytes are released as soon as they arrive unless they belong to the final
/// block, so at most one block is ever retained no matter how the input is
/// chunked. Feeding more than the declared total fails with
/// `too much data`; finalizing before the declared total has arrived fails
/// with a size error as well.
#[derive(Debug)]
pub struct FastUnpadder {
    kind: PaddingKind,
    block_size: usize,
    total: usize,
    seen: usize,
    tail: Vec<u8>,
    finalized: bool,
}

impl FastUnpadder {
    pub(crate) fn new(kind: PaddingKind, block_size: usize, total: usize) -> Result<Self> {
        if kind != PaddingKind::None {
            validate::parameter(
                total >= block_size && total % block_size == 0,
                "fast unpadder total",
                "total ciphertext length must be a positive multiple of block_size",
            )?;
        }
        Ok(Self {
            kind,
            block_size,
            total,
            seen: 0,
            tail: Vec::with_capacity(block_size),
            finalized: false,
        })
    }

    /// Declared total length
    pub fn total(&self) -> usize {
        self.total
    }

    /// Bytes still expected
    pub fn remaining(&self) -> usize {
        self.total - self.seen
    }
}

impl StreamingTransform for FastUnpadder {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "fast unpadder update")?;
        validate::max_total("fast unpadder update", self.seen + data.len(), self.total)?;

        let start = self.seen;
        self.seen += data.len();
        if self.kind == PaddingKind::None {
            return Ok(data.to_vec());
        }

        let tail_start = self.total - self.block_size;
        let split = tail_start.saturating_sub(start).min(data.len());
        let (head, rest) = data.split_at(split);
        self.tail.extend_from_slice(rest);
        Ok(head.to_vec())
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "fast unpadder finalize")?;
        self.finalized = true;
        if self.seen != self.total {
            self.tail.zeroize();
            return Err(Error::size(
                "fast unpadder finalize",
                format!("expected {} bytes, got {}", self.total, self.seen),
            ));
        }
        if self.kind == PaddingKind::None {
            return Ok(Vec::new());
        }

        let mut block = core::mem::take(&mut self.tail);
        let outcome = check(self.kind, &block)
            .map(|padded_size| block[..self.block_size - padded_size].to_vec());
        block.zeroize();
        outcome
    }
}

impl Drop for FastUnpadder {
    fn drop(&mut self) {
        self.tail.zeroize();
    }
}
