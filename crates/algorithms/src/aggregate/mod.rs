//! Order-independent aggregate digests
//!
//! A set of equal-size digests is summarized by XOR-folding them into an
//! all-zero accumulator. XOR is commutative and associative, so the result
//! does not depend on the order the digests arrive in, and partial folds
//! computed separately can be merged.
//!
//! The all-zero value is both the empty fold and the fold of any set that
//! cancels out (for example the same digest twice).

use xycrypt_api::{Error, Result};
use xycrypt_internal::xor_in_place;

#[cfg(feature = "std")]
use std::path::Path;

/// XOR-fold accumulator over digests of one fixed size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateDigest {
    acc: Vec<u8>,
    count: usize,
}

impl AggregateDigest {
    /// Empty fold: `digest_size` zero bytes
    pub fn new(digest_size: usize) -> Self {
        Self {
            acc: vec![0u8; digest_size],
            count: 0,
        }
    }

    /// Size of every folded digest
    pub fn digest_size(&self) -> usize {
        self.acc.len()
    }

    /// Number of digests folded in so far, merges included
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been folded in
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Folds one digest in
    pub fn absorb(&mut self, digest: &[u8]) -> Result<()> {
        check_size(digest.len(), self.acc.len())?;
        xor_in_place(&mut self.acc, digest);
        self.count += 1;
        Ok(())
    }

    /// Folds another partial result in
    pub fn merge(&mut self, other: &AggregateDigest) -> Result<()> {
        check_size(other.acc.len(), self.acc.len())?;
        xor_in_place(&mut self.acc, &other.acc);
        self.count += other.count;
        Ok(())
    }

    /// The folded digest
    pub fn finish(self) -> Vec<u8> {
        self.acc
    }
}

fn check_size(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::size(
            "aggregate digest",
            format!("expected a {}-byte digest, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// XOR-fold of `digests`, each exactly `digest_size` bytes
pub fn xor_fold<I>(digest_size: usize, digests: I) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut fold = AggregateDigest::new(digest_size);
    for digest in digests {
        fold.absorb(digest.as_ref())?;
    }
    Ok(fold.finish())
}

/// Aggregate digest of the directory tree at `path`
///
/// `leaf` digests each non-directory entry. Sub-directories are reduced
/// recursively and folded in at their parent like any other entry.
/// Symbolic links are followed.
#[cfg(feature = "std")]
pub fn digest_tree<F>(path: &Path, digest_size: usize, mut leaf: F) -> Result<Vec<u8>>
where
    F: FnMut(&Path) -> Result<Vec<u8>>,
{
    walk(path, digest_size, &mut leaf)
}

#[cfg(feature = "std")]
fn walk<F>(path: &Path, digest_size: usize, leaf: &mut F) -> Result<Vec<u8>>
where
    F: FnMut(&Path) -> Result<Vec<u8>>,
{
    let mut fold = AggregateDigest::new(digest_size);
    for entry in std::fs::read_dir(path)? {
        let entry = entry?.path();
        let digest = if entry.is_dir() {
            walk(&entry, digest_size, leaf)?
        } else {
            leaf(&entry)?
        };
        fold.absorb(&digest)?;
    }
    tracing::debug!(path = %path.display(), entries = fold.len(), "directory folded");
    Ok(fold.finish())
}
