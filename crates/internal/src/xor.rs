//! Byte-wise XOR helpers

/// XOR `src` into `dst` byte by byte
///
/// Only the common prefix of the two slices is touched.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// XOR every byte of `src` with the constant `byte` into `dst`
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8], byte: u8) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s ^ byte;
    }
}
