//! Counter mode
//!
//! The whole block is the counter: it starts at the nonce and is incremented
//! as a big-endian integer, wrapping on overflow.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use xycrypt_api::{validate, Result, StreamingTransform};

use crate::block::BlockPrimitive;

/// CTR stream; encryption and decryption are the same operation
pub struct Ctr<B: BlockPrimitive> {
    cipher: B,
    counter: Vec<u8>,
    keystream: Vec<u8>,
    pos: usize,
    finalized: bool,
}

impl<B: BlockPrimitive> Ctr<B> {
    /// Creates a CTR stream; `nonce` is the initial counter block
    pub fn new(cipher: B, nonce: &[u8]) -> Self {
        let block_size = cipher.block_size();
        Self {
            cipher,
            counter: nonce.to_vec(),
            keystream: vec![0u8; block_size],
            pos: block_size,
            finalized: false,
        }
    }

    fn generate_keystream(&mut self) {
        self.keystream.copy_from_slice(&self.counter);
        self.cipher.encrypt_block(&mut self.keystream);
        increment_counter(&mut self.counter);
        self.pos = 0;
    }
}

/// Big-endian increment of the whole counter block
fn increment_counter(counter: &mut [u8]) {
    match counter.len() {
        16 => {
            let value = BigEndian::read_u128(counter);
            BigEndian::write_u128(counter, value.wrapping_add(1));
        }
        8 => {
            let value = BigEndian::read_u64(counter);
            BigEndian::write_u64(counter, value.wrapping_add(1));
        }
        _ => {
            for byte in counter.iter_mut().rev() {
                *byte = byte.wrapping_add(1);
                if *byte != 0 {
                    break;
                }
            }
        }
    }
}

impl<B: BlockPrimitive> StreamingTransform for Ctr<B> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CTR update")?;
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            if self.pos == self.keystream.len() {
                self.generate_keystream();
            }
            out.push(byte ^ self.keystream[self.pos]);
            self.pos += 1;
        }
        Ok(out)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "CTR finalize")?;
        self.finalized = true;
        Ok(Vec::new())
    }
}

impl<B: BlockPrimitive> Drop for Ctr<B> {
    fn drop(&mut self) {
        self.counter.zeroize();
        self.keystream.zeroize();
    }
}
