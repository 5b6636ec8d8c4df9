//! Output feedback mode

use zeroize::Zeroize;

use xycrypt_api::{validate, Result, StreamingTransform};

use crate::block::BlockPrimitive;

/// OFB stream; encryption and decryption are the same operation
pub struct Ofb<B: BlockPrimitive> {
    cipher: B,
    register: Vec<u8>,
    pos: usize,
    finalized: bool,
}

impl<B: BlockPrimitive> Ofb<B> {
    /// Creates an OFB stream; `iv` must be one block long
    pub fn new(cipher: B, iv: &[u8]) -> Self {
        let block_size = cipher.block_size();
        Self {
            cipher,
            register: iv.to_vec(),
            pos: block_size,
            finalized: false,
        }
    }
}

impl<B: BlockPrimitive> StreamingTransform for Ofb<B> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "OFB update")?;
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            if self.pos == self.register.len() {
                // The register is its own next input
                self.cipher.encrypt_block(&mut self.register);
                self.pos = 0;
            }
            out.push(byte ^ self.register[self.pos]);
            self.pos += 1;
        }
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "OFB finalize")?;
        self.finalized = true;
        Ok(Vec::new())
    }
}

impl<B: BlockPrimitive> Drop for Ofb<B> {
    fn drop(&mut self) {
        self.register.zeroize();
    }
}
