//! Cipher feedback mode with a full-block segment
//!
//! The keystream block is the encryption of the previous ciphertext block.
//! Ciphertext bytes are collected into the feedback register as they are
//! produced, so a partial final block is fine.

use zeroize::Zeroize;

use xycrypt_api::{validate, Result, StreamingTransform};

use super::Direction;
use crate::block::BlockPrimitive;

/// CFB stream
pub struct Cfb<B: BlockPrimitive> {
    cipher: B,
    direction: Direction,
    // Ciphertext of the current segment, becomes the next cipher input
    register: Vec<u8>,
    keystream: Vec<u8>,
    pos: usize,
    finalized: bool,
}

impl<B: BlockPrimitive> Cfb<B> {
    /// Creates a CFB stream; `iv` must be one block long
    pub fn new(cipher: B, iv: &[u8], direction: Direction) -> Self {
        let block_size = cipher.block_size();
        Self {
            cipher,
            direction,
            register: iv.to_vec(),
            keystream: vec![0u8; block_size],
            // Forces a keystream refill on the first byte
            pos: block_size,
            finalized: false,
        }
    }

    fn refill(&mut self) {
        self.keystream.copy_from_slice(&self.register);
        self.cipher.encrypt_block(&mut self.keystream);
        self.pos = 0;
    }
}

impl<B: BlockPrimitive> StreamingTransform for Cfb<B> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CFB update")?;
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            if self.pos == self.keystream.len() {
                self.refill();
            }
            let produced = byte ^ self.keystream[self.pos];
            self.register[self.pos] = match self.direction {
                Direction::Encrypt => produced,
                Direction::Decrypt => byte,
            };
            self.pos += 1;
            out.push(produced);
        }
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CFB finalize")?;
        self.finalized = true;
        Ok(Vec::new())
    }
}

impl<B: BlockPrimitive> Drop for Cfb<B> {
    fn drop(&mut self) {
        self.register.zeroize();
        self.keystream.zeroize();
    }
}
