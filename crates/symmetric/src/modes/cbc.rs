//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV (NIST SP 800-38A).
//! The stream keeps the chaining block between calls, so a message may be
//! split at any byte offset.

use zeroize::Zeroize;

use xycrypt_api::{validate, Result, StreamingTransform};
use xycrypt_internal::xor_in_place;

use super::{partial_block, take_whole_blocks, Direction};
use crate::block::BlockPrimitive;

/// CBC stream
pub struct Cbc<B: BlockPrimitive> {
    cipher: B,
    direction: Direction,
    chain: Vec<u8>,
    pending: Vec<u8>,
    finalized: bool,
}

impl<B: BlockPrimitive> Cbc<B> {
    /// Creates a CBC stream; `iv` must be one block long
    pub fn new(cipher: B, iv: &[u8], direction: Direction) -> Self {
        Self {
            cipher,
            direction,
            chain: iv.to_vec(),
            pending: Vec::new(),
            finalized: false,
        }
    }

    fn encrypt_blocks(&mut self, out: &mut [u8]) {
        for block in out.chunks_mut(self.cipher.block_size()) {
            xor_in_place(block, &self.chain);
            self.cipher.encrypt_block(block);
            self.chain.copy_from_slice(block);
        }
    }

    fn decrypt_blocks(&mut self, out: &mut [u8]) {
        let mut saved = vec![0u8; self.cipher.block_size()];
        for block in out.chunks_mut(self.cipher.block_size()) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block);
            xor_in_place(block, &self.chain);
            core::mem::swap(&mut self.chain, &mut saved);
        }
        saved.zeroize();
    }
}

impl<B: BlockPrimitive> StreamingTransform for Cbc<B> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CBC update")?;
        self.pending.extend_from_slice(data);
        let mut out = take_whole_blocks(&mut self.pending, self.cipher.block_size());
        match self.direction {
            Direction::Encrypt => self.encrypt_blocks(&mut out),
            Direction::Decrypt => self.decrypt_blocks(&mut out),
        }
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CBC finalize")?;
        self.finalized = true;
        if !self.pending.is_empty() {
            return Err(partial_block("CBC"));
        }
        Ok(Vec::new())
    }
}

impl<B: BlockPrimitive> Drop for Cbc<B> {
    fn drop(&mut self) {
        self.chain.zeroize();
        self.pending.zeroize();
    }
}
