//! Constant-time operations to prevent timing attacks

use subtle::{ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. The running time
/// depends only on the lengths, which are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// `0xFF` when `a == b`, `0x00` otherwise, without branching on the values
pub fn ct_eq_mask(a: u8, b: u8) -> u8 {
    u8::conditional_select(&0x00, &0xFF, a.ct_eq(&b))
}

/// `0xFF` when `a <= b`, `0x00` otherwise, without branching on the values
pub fn ct_le_mask(a: u8, b: u8) -> u8 {
    u8::conditional_select(&0xFF, &0x00, a.ct_gt(&b))
}
