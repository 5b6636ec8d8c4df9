//! The incremental `update`/`finalize` protocol

use crate::error::Result;

/// An object that consumes a multi-call byte stream
///
/// `update` returns whatever output is ready, which may be empty. `finalize`
/// flushes the remaining state; afterwards the transform rejects every call
/// with [`Error::State`](crate::Error::State). Feeding a message in any
/// sequence of chunks produces the same concatenated output as a single
/// `update` with the whole message.
pub trait StreamingTransform {
    /// Consume `data` and return the output that is ready
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Flush remaining state and return the final output
    fn finalize(&mut self) -> Result<Vec<u8>>;

    /// Run `data` through a fresh transform in one call
    fn process(&mut self, data: &[u8]) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        let mut out = self.update(data)?;
        out.extend_from_slice(&self.finalize()?);
        Ok(out)
    }
}

impl<T: StreamingTransform + ?Sized> StreamingTransform for Box<T> {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).update(data)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        (**self).finalize()
    }
}

impl<T: StreamingTransform + ?Sized> StreamingTransform for &mut T {
    fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).update(data)
    }

    fn finalize(&mut self) -> Result<Vec<u8>> {
        (**self).finalize()
    }
}
