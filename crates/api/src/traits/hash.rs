//! Hash-stream capability consumed by HMAC and the aggregate digest

/// A hashing context supplied by a hash backend
///
/// `finalize` does not consume the context: it returns the digest of
/// everything absorbed so far, and the context can keep absorbing. `copy`
/// produces a clone that owns its own state.
pub trait HashStream: Clone {
    /// Algorithm name
    const NAME: &'static str;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Digest size in bytes
    const DIGEST_SIZE: usize;

    /// Fresh context
    fn new() -> Self;

    /// Absorb `data`
    fn update(&mut self, data: &[u8]);

    /// Digest of the data absorbed so far, exactly `DIGEST_SIZE` bytes
    fn finalize(&self) -> Vec<u8>;

    /// Independent clone of the current state
    fn copy(&self) -> Self {
        self.clone()
    }
}
