//! HMAC (Hash-based Message Authentication Code) over any hash stream
//!
//! RFC 2104 / FIPS 198-1. The key is hashed when it is longer than the hash
//! block and zero-padded to the block size. The inner and outer contexts are
//! primed with the key XORed with `0x36` and `0x5c` respectively; the padded
//! key and both pad blocks are wiped as soon as the contexts are primed.

use core::fmt;
use std::io::Read;

use zeroize::Zeroizing;

use xycrypt_api::{HashStream, Result};
use xycrypt_internal::{ct_eq, xor_into};
use xycrypt_params::utils::hash::{HMAC_IPAD_BYTE, HMAC_OPAD_BYTE};

use crate::hash::read_chunks;

#[cfg(feature = "std")]
use std::path::Path;

/// Keyed digest built from two hash streams
///
/// `finalize` does not consume the context: it tags the data absorbed so far
/// and the context keeps accepting `update` calls.
#[derive(Clone)]
pub struct Hmac<H: HashStream> {
    inner: H,
    outer: H,
}

impl<H: HashStream> Hmac<H> {
    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Self {
        let bs = H::BLOCK_SIZE;

        let hashed;
        let key = if key.len() > bs {
            let mut ctx = H::new();
            ctx.update(key);
            hashed = Zeroizing::new(ctx.finalize());
            &hashed[..]
        } else {
            key
        };

        // A digest longer than the block is kept whole rather than truncated
        let mut k_prime = Zeroizing::new(vec![0u8; bs.max(key.len())]);
        k_prime[..key.len()].copy_from_slice(key);

        let mut pad = Zeroizing::new(vec![0u8; k_prime.len()]);

        let mut inner = H::new();
        xor_into(&mut pad, &k_prime, HMAC_IPAD_BYTE);
        inner.update(&pad);

        let mut outer = H::new();
        xor_into(&mut pad, &k_prime, HMAC_OPAD_BYTE);
        outer.update(&pad);

        Self { inner, outer }
    }

    /// Block size of the underlying hash
    pub fn block_size(&self) -> usize {
        H::BLOCK_SIZE
    }

    /// Tag size in bytes
    pub fn digest_size(&self) -> usize {
        H::DIGEST_SIZE
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Tag of everything absorbed so far
    pub fn finalize(&self) -> Vec<u8> {
        let mut outer = self.outer.copy();
        outer.update(&self.inner.finalize());
        outer.finalize()
    }

    /// Constant-time comparison of `tag` against [`finalize`](Self::finalize)
    pub fn verify(&self, tag: &[u8]) -> bool {
        ct_eq(self.finalize(), tag)
    }

    /// Independent clone of both contexts
    pub fn copy(&self) -> Self {
        Self {
            inner: self.inner.copy(),
            outer: self.outer.copy(),
        }
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut h = Self::new(key);
        h.update(data);
        h.finalize()
    }

    /// MAC of the concatenation of `chunks`
    pub fn mac_iter<I>(key: &[u8], chunks: I) -> Vec<u8>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut h = Self::new(key);
        for chunk in chunks {
            h.update(chunk.as_ref());
        }
        h.finalize()
    }

    /// MAC of everything `reader` yields
    pub fn mac_reader<R: Read>(key: &[u8], reader: R) -> Result<Vec<u8>> {
        let mut h = Self::new(key);
        read_chunks(reader, |chunk| h.update(chunk))?;
        Ok(h.finalize())
    }

    /// MAC of a file's contents
    #[cfg(feature = "std")]
    pub fn mac_file(key: &[u8], path: impl AsRef<Path>) -> Result<Vec<u8>> {
        Self::mac_reader(key, std::fs::File::open(path)?)
    }

    /// Order-independent MAC of a directory tree
    ///
    /// Each file is tagged on its own and the tags are XOR-folded, the same
    /// way [`hash_dir`](crate::hash::hash_dir) folds digests. An empty
    /// directory gives the all-zero tag.
    #[cfg(feature = "std")]
    pub fn mac_dir(key: &[u8], path: impl AsRef<Path>) -> Result<Vec<u8>> {
        crate::aggregate::digest_tree(path.as_ref(), H::DIGEST_SIZE, |file| {
            Self::mac_file(key, file)
        })
    }

    /// [`mac_dir`](Self::mac_dir) for directories, [`mac_file`](Self::mac_file)
    /// for anything else
    #[cfg(feature = "std")]
    pub fn mac_fs(key: &[u8], path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::mac_dir(key, path)
        } else {
            Self::mac_file(key, path)
        }
    }
}

impl<H: HashStream> fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hmac<{}> {{ .. }}", H::NAME)
    }
}
