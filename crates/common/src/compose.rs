//! Gluing two streaming transforms into one
//!
//! A [`ComposedTransform`] owns an `outer` and an `inner` transform. Data
//! enters `inner`, whatever `inner` releases is fed to `outer`, and `outer`'s
//! output is returned:
//!
//! ```text
//! update(d)  = outer.update(inner.update(d))
//! finalize() = outer.update(inner.finalize()) ++ outer.finalize()
//! ```
//!
//! Encryption puts the padder inside the cipher (`outer = cipher`,
//! `inner = padder`); decryption puts the cipher inside the unpadder
//! (`outer = unpadder`, `inner = cipher`). The shape is the same, the caller
//! picks the ordering.

use xycrypt_api::{validate, Result, StreamingTransform};

/// Two streaming transforms presented as one
///
/// The composed value is the sole owner of both halves; neither should be
/// driven on its own once composed.
#[derive(Debug)]
pub struct ComposedTransform<O, I> {
    outer: O,
    inner: I,
    finalized: bool,
}

impl<O, I> ComposedTransform<O, I>
where
    O: StreamingTransform,
    I: StreamingTransform,
{
    /// Feeds `inner`'s output into `outer`
    pub fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            finalized: false,
        }
    }

    /// Splits the composition back into `(outer, inner)`
    pub fn into_parts(self) -> (O, I) {
        (self.outer, self.inner)
    }
}

impl<O, I> StreamingTransform for ComposedTransform<O, I>
where
    O: StreamingTransform,
    I: StreamingTransform,
{
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "composed update")?;
        let staged = self.inner.update(data)?;
        self.outer.update(&staged)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        validate::not_finalized(self.finalized, "composed finalize")?;
        self.finalized = true;
        let tail = self.inner.finalize()?;
        let mut out = self.outer.update(&tail)?;
        out.extend_from_slice(&self.outer.finalize()?);
        tracing::trace!(bytes = out.len(), "composed stream finalized");
        Ok(out)
    }
}

/// Encrypting composition: the padder feeds the cipher encryptor
pub fn pad_then_encrypt<C, P>(encryptor: C, padder: P) -> ComposedTransform<C, P>
where
    C: StreamingTransform,
    P: StreamingTransform,
{
    ComposedTransform::new(encryptor, padder)
}

/// Decrypting composition: the cipher decryptor feeds the unpadder
pub fn decrypt_then_unpad<U, C>(unpadder: U, decryptor: C) -> ComposedTransform<U, C>
where
    U: StreamingTransform,
    C: StreamingTransform,
{
    ComposedTransform::new(unpadder, decryptor)
}
