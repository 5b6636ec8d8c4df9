//! Hash streams and one-shot digest helpers
//!
//! Adapters over the RustCrypto hash crates: MD5, SHA-1, the SHA-2 and SHA-3
//! families, SHAKE with a fixed output length, and BLAKE2b/BLAKE2s. The
//! helpers are generic over any [`HashStream`]: memory, chunk iterators,
//! readers and, with the `std` feature, files and directory trees.

use std::io::{ErrorKind, Read};

use xycrypt_api::{HashStream, Result};
use xycrypt_params::utils::hash::CHUNK_SIZE;

/// Wraps a fixed-output backend context as a [`HashStream`]
///
/// The backend's `Digest` trait must be in scope where this is invoked.
/// `finalize` runs on a clone, so the stream keeps absorbing afterwards.
macro_rules! digest_stream {
    ($(#[$doc:meta])* $name:ident, $backend:ty, $label:literal, $block:expr, $digest:expr) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name($backend);

        impl $crate::HashStream for $name {
            const NAME: &'static str = $label;
            const BLOCK_SIZE: usize = $block;
            const DIGEST_SIZE: usize = $digest;

            fn new() -> Self {
                Self(<$backend as Digest>::new())
            }

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.0, data);
            }

            fn finalize(&self) -> Vec<u8> {
                Digest::finalize(self.0.clone()).to_vec()
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($label)
            }
        }
    };
}

pub mod blake2;
pub mod md5;
pub mod sha1;
pub mod sha2;
pub mod sha3;
pub mod shake;

pub use self::blake2::{Blake2b, Blake2s};
pub use self::md5::Md5;
pub use self::sha1::Sha1;
pub use self::sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
pub use self::sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
pub use self::shake::{Shake128, Shake256};

#[cfg(feature = "std")]
use std::path::Path;

/// Digest of `data`
pub fn hash<H: HashStream>(data: &[u8]) -> Vec<u8> {
    let mut ctx = H::new();
    ctx.update(data);
    ctx.finalize()
}

/// Digest of the concatenation of `chunks`
pub fn hash_iter<H, I>(chunks: I) -> Vec<u8>
where
    H: HashStream,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut ctx = H::new();
    for chunk in chunks {
        ctx.update(chunk.as_ref());
    }
    ctx.finalize()
}

/// Digest of everything `reader` yields, read in 1 MiB chunks
pub fn hash_reader<H: HashStream, R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut ctx = H::new();
    read_chunks(reader, |chunk| ctx.update(chunk))?;
    Ok(ctx.finalize())
}

/// Digest of a file's contents
#[cfg(feature = "std")]
pub fn hash_file<H: HashStream>(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    hash_reader::<H, _>(std::fs::File::open(path)?)
}

/// Order-independent digest of a directory tree
///
/// Every file is hashed on its own and the results are XOR-folded, with each
/// sub-directory reduced first. An empty directory gives the all-zero digest.
#[cfg(feature = "std")]
pub fn hash_dir<H: HashStream>(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    crate::aggregate::digest_tree(path.as_ref(), H::DIGEST_SIZE, |file| hash_file::<H>(file))
}

/// [`hash_dir`] for directories, [`hash_file`] for anything else
#[cfg(feature = "std")]
pub fn hash_fs<H: HashStream>(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if path.is_dir() {
        hash_dir::<H>(path)
    } else {
        hash_file::<H>(path)
    }
}

/// Feeds `reader` to `sink` one chunk at a time until EOF
pub(crate) fn read_chunks<R, F>(mut reader: R, mut sink: F) -> Result<()>
where
    R: Read,
    F: FnMut(&[u8]),
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => sink(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
