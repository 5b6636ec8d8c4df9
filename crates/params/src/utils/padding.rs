//! Constants for block padding schemes

/// Smallest block size a padding scheme accepts
pub const MIN_PADDING_BLOCK_SIZE: usize = 1;

/// Largest block size a padding scheme accepts; the pad length must fit in one byte
pub const MAX_PADDING_BLOCK_SIZE: usize = 255;
