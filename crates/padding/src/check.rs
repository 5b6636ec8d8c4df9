//! Branch-free validation of the final block

use xycrypt_api::{Error, Result};
use xycrypt_internal::{ct_eq_mask, ct_le_mask};

use crate::PaddingKind;

/// Validates the pad in `block` and returns the pad length
///
/// `block` is exactly one block. Every byte is visited regardless of the pad
/// length byte, and the length and content checks fold into one mask, so the
/// only observable outcome is valid or `invalid padding`.
pub(crate) fn check(kind: PaddingKind, block: &[u8]) -> Result<usize> {
    let block_size = block.len();
    let padded_size = block[block_size - 1];

    let mut bad = ct_eq_mask(padded_size, 0) | !ct_le_mask(padded_size, block_size as u8);

    // pos counts from the end: the length byte is pos 1
    for (i, &b) in block.iter().rev().enumerate().skip(1) {
        let pos = (i + 1) as u8;
        let in_pad = ct_le_mask(pos, padded_size);
        let expected = match kind {
            PaddingKind::Pkcs7 => ct_eq_mask(b, padded_size),
            PaddingKind::AnsiX923 => ct_eq_mask(b, 0),
            // random filler, only the length is checked
            PaddingKind::Iso10126 | PaddingKind::None => 0xFF,
        };
        bad |= in_pad & !expected;
    }

    if bad != 0 {
        return Err(Error::invalid_padding());
    }
    Ok(padded_size as usize)
}
