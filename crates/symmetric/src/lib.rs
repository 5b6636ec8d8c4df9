//! Symmetric encryption streams for the xycrypt library
//!
//! A [`Cipher`] is a plain value: a [`CipherDescriptor`] (algorithm name,
//! block size, key sizes), a backend bound to key and mode, and an optional
//! [`PaddingScheme`](xycrypt_padding::PaddingScheme). Its encryptor and
//! decryptor are the backend streams, composed with a padder or unpadder
//! when a scheme is set.
//!
//! The block-mode backend drives any [`BlockPrimitive`] in ECB, CBC, CFB,
//! OFB or CTR mode. AES and Triple DES come from the RustCrypto `aes` and
//! `des` crates; ChaCha20 from `chacha20` is a native stream cipher.

pub mod block;
pub mod cipher;
pub mod modes;
pub mod stream;

pub use block::{Aes, BlockPrimitive, TripleDes};
pub use cipher::{Cipher, CipherDescriptor, PaddingPolicy, AES, CHACHA20, TRIPLE_DES};
pub use modes::{BlockModeBackend, Direction, Mode, ModeParams};
pub use stream::{ChaCha20Backend, ChaCha20Stream};

pub use xycrypt_api::{CipherBackend, Error, ModeKind, Result, StreamingTransform};
