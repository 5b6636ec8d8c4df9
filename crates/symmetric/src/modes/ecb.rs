//! Electronic codebook mode

use zeroize::Zeroize;

use xycrypt_api::{validate, Result, StreamingTransform};

use super::{partial_block, take_whole_blocks, Direction};
use crate::block::BlockPrimitive;

/// ECB stream: each block is transformed independently
pub struct Ecb<B: BlockPrimitive> {
    cipher: B,
    direction: Direction,
    pending: Vec<u8>,
    finalized: bool,
}

impl<B: BlockPrimitive> Ecb<B> {
    /// Creates an ECB stream
    pub fn new(cipher: B, direction: Direction) -> Self {
        Self {
            cipher,
            direction,
            pending: Vec::new(),
            finalized: false,
        }
    }
}

impl<B: BlockPrimitive> StreamingTransform for Ecb<B> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "ECB update")?;
        self.pending.extend_from_slice(data);
        let mut out = take_whole_blocks(&mut self.pending, self.cipher.block_size());
        for block in out.chunks_mut(self.cipher.block_size()) {
            match self.direction {
                Direction::Encrypt => self.cipher.encrypt_block(block),
                Direction::Decrypt => self.cipher.decrypt_block(block),
            }
        }
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "ECB finalize")?;
        self.finalized = true;
        if !self.pending.is_empty() {
            return Err(partial_block("ECB"));
        }
        Ok(Vec::new())
    }
}

impl<B: BlockPrimitive> Drop for Ecb<B> {
    fn drop(&mut self) {
        self.pending.zeroize();
    }
}
