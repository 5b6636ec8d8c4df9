//! SHAKE extendable-output streams backed by the RustCrypto `sha3` crate
//!
//! The output length is a const parameter, so each instantiation is a
//! fixed-size [`HashStream`] usable with HMAC and the aggregate digest.
//! `Shake128` defaults to 16 bytes and `Shake256` to 32.

use core::fmt;

use sha3::digest::{ExtendableOutput, Update, XofReader};
use xycrypt_api::HashStream;
use xycrypt_params::utils::hash::{
    SHAKE128_BLOCK_SIZE, SHAKE128_DEFAULT_OUTPUT_SIZE, SHAKE256_BLOCK_SIZE,
    SHAKE256_DEFAULT_OUTPUT_SIZE,
};

macro_rules! shake_stream {
    ($(#[$doc:meta])* $name:ident, $backend:ty, $label:literal, $block:expr, $default:expr) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name<const N: usize = $default>($backend);

        impl<const N: usize> HashStream for $name<N> {
            const NAME: &'static str = $label;
            const BLOCK_SIZE: usize = $block;
            const DIGEST_SIZE: usize = N;

            fn new() -> Self {
                Self(<$backend>::default())
            }

            fn update(&mut self, data: &[u8]) {
                Update::update(&mut self.0, data);
            }

            fn finalize(&self) -> Vec<u8> {
                let mut out = vec![0u8; N];
                self.0.clone().finalize_xof().read(&mut out);
                out
            }
        }

        impl<const N: usize> fmt::Debug for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}/{}", $label, N)
            }
        }
    };
}

shake_stream!(
    /// SHAKE128 with an `N`-byte output
    Shake128, sha3::Shake128, "SHAKE128", SHAKE128_BLOCK_SIZE, SHAKE128_DEFAULT_OUTPUT_SIZE
);
shake_stream!(
    /// SHAKE256 with an `N`-byte output
    Shake256, sha3::Shake256, "SHAKE256", SHAKE256_BLOCK_SIZE, SHAKE256_DEFAULT_OUTPUT_SIZE
);
